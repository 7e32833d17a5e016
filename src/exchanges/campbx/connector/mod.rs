use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{
    AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer, WalletOperations,
};
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::endpoints::Endpoint;
use crate::exchanges::campbx::rest::CampBxRestClient;
use async_trait::async_trait;

pub mod account;
pub mod market_data;
pub mod trading;
pub mod wallet;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;
pub use wallet::Wallet;

/// CampBX connector that composes all sub-trait implementations
///
/// Every sub-connector shares one rest client, so they share its
/// connection pool and debug flag.
pub struct CampBxConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub account: Account<R>,
    pub wallet: Wallet<R>,
    pub trading: Trading<R>,
    rest: CampBxRestClient<R>,
}

impl<R: RestClient> CampBxConnector<R> {
    pub fn new(rest: R, debug: bool) -> Self {
        Self::with_rest_client(CampBxRestClient::new(rest, debug))
    }

    pub fn with_rest_client(rest: CampBxRestClient<R>) -> Self {
        Self {
            market: MarketData::new(&rest),
            account: Account::new(&rest),
            wallet: Wallet::new(&rest),
            trading: Trading::new(&rest),
            rest,
        }
    }

    pub fn rest(&self) -> &CampBxRestClient<R> {
        &self.rest
    }

    /// Toggle debug lines for every request made through this connector
    pub fn set_debug_mode(&self, enabled: bool) {
        self.rest.set_debug_mode(enabled);
    }

    /// Call any endpoint, keeping the failure detail
    pub async fn dispatch(
        &self,
        endpoint: Endpoint,
        params: Params,
    ) -> Result<ApiValue, ExchangeError> {
        self.rest.dispatch(endpoint, params).await
    }

    /// Call any endpoint; failures are logged and become the empty mapping
    pub async fn request(&self, endpoint: Endpoint, params: Params) -> ApiValue {
        self.rest.request(endpoint, params).await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for CampBxConnector<R> {
    async fn xdepth(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.market.xdepth(params).await
    }

    async fn xticker(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.market.xticker(params).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for CampBxConnector<R> {
    async fn my_funds(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.account.my_funds(params).await
    }

    async fn my_orders(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.account.my_orders(params).await
    }

    async fn my_margins(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.account.my_margins(params).await
    }
}

#[async_trait]
impl<R: RestClient> WalletOperations for CampBxConnector<R> {
    async fn get_btc_address(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.wallet.get_btc_address(params).await
    }

    async fn send_instant(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.wallet.send_instant(params).await
    }

    async fn send_btc(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.wallet.send_btc(params).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for CampBxConnector<R> {
    async fn trade_enter(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.trading.trade_enter(params).await
    }

    async fn trade_advanced(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.trading.trade_advanced(params).await
    }

    async fn trade_cancel(&self, params: Params) -> Result<ApiValue, ExchangeError> {
        self.trading.trade_cancel(params).await
    }
}

impl<R: RestClient> ExchangeConnector for CampBxConnector<R> {}
