use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClient};
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::builder::build_connector;
use crate::exchanges::campbx::connector::CampBxConnector;
use crate::exchanges::campbx::endpoints::Endpoint;
use tokio::runtime::{Builder, Runtime};

/// Blocking CampBX client
///
/// Each call returns once the HTTP round trip is finished. Failures of any
/// kind are logged and come back as the empty mapping; use
/// [`CampBx::try_call`] to see the error instead.
///
/// The client drives its own single-threaded runtime, so it must not be
/// used from inside an async context. Use [`CampBxConnector`] there.
///
/// ```rust,no_run
/// use campbx::{CampBx, ExchangeConfig, Params};
///
/// let client = CampBx::new(ExchangeConfig::read_only()).unwrap();
/// let ticker = client.xticker(Params::new());
/// println!("last trade: {}", ticker["Last Trade"]);
/// ```
pub struct CampBx<R: RestClient = ReqwestRest> {
    connector: CampBxConnector<R>,
    runtime: Runtime,
}

impl CampBx<ReqwestRest> {
    pub fn new(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        Self::with_connector(build_connector(config)?)
    }

    /// Client with an account login and default settings
    pub fn with_credentials(username: &str, password: &str) -> Result<Self, ExchangeError> {
        Self::new(ExchangeConfig::new(
            username.to_string(),
            password.to_string(),
        ))
    }
}

impl<R: RestClient> CampBx<R> {
    pub fn with_connector(connector: CampBxConnector<R>) -> Result<Self, ExchangeError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build runtime: {}", e))
            })?;

        Ok(Self { connector, runtime })
    }

    pub fn connector(&self) -> &CampBxConnector<R> {
        &self.connector
    }

    /// `true` logs every request URL and its parameters, `false` only errors
    pub fn debug_mode(&self, enabled: bool) {
        self.connector.set_debug_mode(enabled);
    }

    pub fn call(&self, endpoint: Endpoint, params: Params) -> ApiValue {
        self.runtime.block_on(self.connector.request(endpoint, params))
    }

    pub fn try_call(&self, endpoint: Endpoint, params: Params) -> Result<ApiValue, ExchangeError> {
        self.runtime
            .block_on(self.connector.dispatch(endpoint, params))
    }

    pub fn xdepth(&self, params: Params) -> ApiValue {
        self.call(Endpoint::XDepth, params)
    }

    pub fn xticker(&self, params: Params) -> ApiValue {
        self.call(Endpoint::XTicker, params)
    }

    pub fn my_funds(&self, params: Params) -> ApiValue {
        self.call(Endpoint::MyFunds, params)
    }

    pub fn my_orders(&self, params: Params) -> ApiValue {
        self.call(Endpoint::MyOrders, params)
    }

    pub fn my_margins(&self, params: Params) -> ApiValue {
        self.call(Endpoint::MyMargins, params)
    }

    pub fn get_btc_address(&self, params: Params) -> ApiValue {
        self.call(Endpoint::GetBtcAddress, params)
    }

    pub fn send_instant(&self, params: Params) -> ApiValue {
        self.call(Endpoint::SendInstant, params)
    }

    pub fn send_btc(&self, params: Params) -> ApiValue {
        self.call(Endpoint::SendBtc, params)
    }

    pub fn trade_cancel(&self, params: Params) -> ApiValue {
        self.call(Endpoint::TradeCancel, params)
    }

    pub fn trade_enter(&self, params: Params) -> ApiValue {
        self.call(Endpoint::TradeEnter, params)
    }

    pub fn trade_advanced(&self, params: Params) -> ApiValue {
        self.call(Endpoint::TradeAdvanced, params)
    }
}

impl<R: RestClient> std::fmt::Debug for CampBx<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampBx")
            .field("debug", &self.connector.rest().debug_mode())
            .finish_non_exhaustive()
    }
}
