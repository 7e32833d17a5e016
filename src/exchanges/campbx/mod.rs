pub mod blocking;
pub mod builder;
pub mod connector;
pub mod conversions;
pub mod endpoints;
pub mod nonblocking;
pub mod rest;
pub mod signer;
pub mod types;

// Re-export main types for easier importing
pub use blocking::CampBx;
pub use builder::{build_connector, build_rest_client};
pub use connector::CampBxConnector;
pub use endpoints::{Endpoint, EndpointDescriptor, ENDPOINTS};
pub use nonblocking::CampBxAsync;
pub use signer::CampBxSigner;
pub use types::{
    AdvancedOrder, CancelOrder, Depth, DepthLevel, FillType, QuickOrder, SendBtc, SendInstant,
    Ticker,
};
