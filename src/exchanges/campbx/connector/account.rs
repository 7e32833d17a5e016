use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::endpoints::Endpoint;
use crate::exchanges::campbx::rest::CampBxRestClient;
use async_trait::async_trait;

/// Balances, open orders and margin positions
pub struct Account<R: RestClient> {
    rest: CampBxRestClient<R>,
}

impl<R: RestClient> Account<R> {
    pub fn new(rest: &CampBxRestClient<R>) -> Self {
        Self { rest: rest.clone() }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    async fn my_funds(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::MyFunds, params).await
    }

    async fn my_orders(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::MyOrders, params).await
    }

    async fn my_margins(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::MyMargins, params).await
    }
}
