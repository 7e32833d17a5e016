use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{EventLoop, Pending, ReqwestRest, RestClient};
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::builder::build_connector;
use crate::exchanges::campbx::connector::CampBxConnector;
use crate::exchanges::campbx::endpoints::Endpoint;
use std::sync::Arc;

const EVENT_LOOP_NAME: &str = "campbx-event-loop";

/// Non-blocking CampBX client
///
/// Every call schedules the request on the client's own [`EventLoop`] and
/// returns a [`Pending`] handle straight away. The handle resolves to the
/// same value the blocking client would return, the empty mapping on any
/// failure included.
///
/// ```rust,no_run
/// use campbx::{CampBxAsync, ExchangeConfig, Params};
///
/// let client = CampBxAsync::new(ExchangeConfig::read_only()).unwrap();
/// let depth = client.xdepth(Params::new());
/// let ticker = client.xticker(Params::new());
/// println!("{} / {}", depth.wait(), ticker.wait());
/// client.stop();
/// ```
pub struct CampBxAsync<R: RestClient + 'static = ReqwestRest> {
    connector: Arc<CampBxConnector<R>>,
    event_loop: EventLoop,
}

impl CampBxAsync<ReqwestRest> {
    pub fn new(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        Self::with_connector(build_connector(config)?)
    }
}

impl<R: RestClient + 'static> CampBxAsync<R> {
    /// Wrap `connector` and start a dedicated event loop for it
    pub fn with_connector(connector: CampBxConnector<R>) -> Result<Self, ExchangeError> {
        Ok(Self::with_event_loop(
            connector,
            EventLoop::start(EVENT_LOOP_NAME)?,
        ))
    }

    /// Wrap `connector` and run its requests on `event_loop`
    pub fn with_event_loop(connector: CampBxConnector<R>, event_loop: EventLoop) -> Self {
        Self {
            connector: Arc::new(connector),
            event_loop,
        }
    }

    pub fn connector(&self) -> &CampBxConnector<R> {
        &self.connector
    }

    pub fn debug_mode(&self, enabled: bool) {
        self.connector.set_debug_mode(enabled);
    }

    /// Stop the event loop; unfinished handles resolve to the empty mapping
    pub fn stop(self) {
        self.event_loop.stop();
    }

    pub fn call(&self, endpoint: Endpoint, params: Params) -> Pending<ApiValue> {
        let connector = Arc::clone(&self.connector);
        self.event_loop
            .spawn(async move { connector.request(endpoint, params).await })
    }

    pub fn xdepth(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::XDepth, params)
    }

    pub fn xticker(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::XTicker, params)
    }

    pub fn my_funds(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::MyFunds, params)
    }

    pub fn my_orders(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::MyOrders, params)
    }

    pub fn my_margins(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::MyMargins, params)
    }

    pub fn get_btc_address(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::GetBtcAddress, params)
    }

    pub fn send_instant(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::SendInstant, params)
    }

    pub fn send_btc(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::SendBtc, params)
    }

    pub fn trade_cancel(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::TradeCancel, params)
    }

    pub fn trade_enter(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::TradeEnter, params)
    }

    pub fn trade_advanced(&self, params: Params) -> Pending<ApiValue> {
        self.call(Endpoint::TradeAdvanced, params)
    }
}

impl<R: RestClient + 'static> std::fmt::Debug for CampBxAsync<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampBxAsync")
            .field("event_loop", &self.event_loop)
            .field("debug", &self.connector.rest().debug_mode())
            .finish_non_exhaustive()
    }
}
