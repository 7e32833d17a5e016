use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::conversions::{convert_depth, convert_ticker};
use crate::exchanges::campbx::endpoints::Endpoint;
use crate::exchanges::campbx::rest::CampBxRestClient;
use crate::exchanges::campbx::types::{Depth, Ticker};
use async_trait::async_trait;
use tracing::instrument;

/// Public market data for CampBX
pub struct MarketData<R: RestClient> {
    rest: CampBxRestClient<R>,
}

impl<R: RestClient> MarketData<R> {
    pub fn new(rest: &CampBxRestClient<R>) -> Self {
        Self { rest: rest.clone() }
    }

    /// Order book as typed price levels
    #[instrument(skip(self))]
    pub async fn get_depth(&self) -> Result<Depth, ExchangeError> {
        let value = self.rest.dispatch(Endpoint::XDepth, Params::new()).await?;
        convert_depth(&value)
    }

    /// Ticker as typed prices
    #[instrument(skip(self))]
    pub async fn get_ticker(&self) -> Result<Ticker, ExchangeError> {
        let value = self.rest.dispatch(Endpoint::XTicker, Params::new()).await?;
        convert_ticker(&value)
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    async fn xdepth(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::XDepth, params).await
    }

    async fn xticker(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::XTicker, params).await
    }
}
