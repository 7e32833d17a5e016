pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::ExchangeError,
    kernel::{EventLoop, Pending},
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer, WalletOperations},
    types::*,
};
pub use crate::exchanges::campbx::{CampBx, CampBxAsync, CampBxConnector, Endpoint};
