use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::endpoints::Endpoint;
use crate::exchanges::campbx::rest::CampBxRestClient;
use crate::exchanges::campbx::types::{AdvancedOrder, CancelOrder, QuickOrder};
use async_trait::async_trait;
use tracing::instrument;

/// Order entry and cancellation
pub struct Trading<R: RestClient> {
    rest: CampBxRestClient<R>,
}

impl<R: RestClient> Trading<R> {
    pub fn new(rest: &CampBxRestClient<R>) -> Self {
        Self { rest: rest.clone() }
    }

    #[instrument(skip(self), fields(side = %order.side, price = %order.price))]
    pub async fn place_order(&self, order: QuickOrder) -> Result<ApiValue, ExchangeError> {
        self.trade_enter(order.into()).await
    }

    #[instrument(skip(self), fields(side = %order.side, price = %order.price))]
    pub async fn place_advanced_order(
        &self,
        order: AdvancedOrder,
    ) -> Result<ApiValue, ExchangeError> {
        self.trade_advanced(order.into()).await
    }

    pub async fn cancel_order(&self, cancel: CancelOrder) -> Result<ApiValue, ExchangeError> {
        self.trade_cancel(cancel.into()).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    async fn trade_enter(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::TradeEnter, params).await
    }

    async fn trade_advanced(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::TradeAdvanced, params).await
    }

    async fn trade_cancel(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::TradeCancel, params).await
    }
}
