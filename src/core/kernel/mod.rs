//! Transport kernel shared by venue connectors
//!
//! Exchange-agnostic plumbing only:
//!
//! - `RestClient` / `ReqwestRest`: form-encoded POST transport with one
//!   pooled `reqwest::Client` per instance
//! - `Signer`: pluggable credential attachment
//! - `codec`: JSON decoding with exact decimal numbers
//! - `EventLoop` / `Pending`: explicitly owned background loop for
//!   non-blocking callers
//!
//! # Example
//! ```rust,no_run
//! use campbx::core::kernel::*;
//! use campbx::core::types::Params;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RestClientConfig::new("https://campbx.com/api/".to_string(), "campbx".to_string())
//!     .with_path_suffix(".php".to_string());
//! let rest = RestClientBuilder::new(config).build()?;
//!
//! let ticker = rest.post_form("xticker", &Params::new(), false).await?;
//! println!("{}", ticker["Last Trade"]);
//! # Ok(())
//! # }
//! ```
pub mod codec;
pub mod event_loop;
pub mod rest;
pub mod signer;

pub use event_loop::{EventLoop, Pending};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{SignatureResult, Signer};
