use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::WalletOperations;
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::endpoints::Endpoint;
use crate::exchanges::campbx::rest::CampBxRestClient;
use crate::exchanges::campbx::types::{SendBtc, SendInstant};
use async_trait::async_trait;

/// Deposit addresses and outgoing transfers
pub struct Wallet<R: RestClient> {
    rest: CampBxRestClient<R>,
}

impl<R: RestClient> Wallet<R> {
    pub fn new(rest: &CampBxRestClient<R>) -> Self {
        Self { rest: rest.clone() }
    }

    pub async fn withdraw(&self, request: SendBtc) -> Result<ApiValue, ExchangeError> {
        self.send_btc(request.into()).await
    }

    pub async fn transfer(&self, request: SendInstant) -> Result<ApiValue, ExchangeError> {
        self.send_instant(request.into()).await
    }
}

#[async_trait]
impl<R: RestClient> WalletOperations for Wallet<R> {
    async fn get_btc_address(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::GetBtcAddress, params).await
    }

    async fn send_instant(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::SendInstant, params).await
    }

    async fn send_btc(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(Endpoint::SendBtc, params).await
    }
}
