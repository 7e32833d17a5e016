use crate::core::{
    errors::ExchangeError,
    types::{ApiValue, Params},
};
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource {
    /// Full order book depth
    async fn xdepth(&self, params: Params) -> Result<ApiValue, ExchangeError>;

    /// Last trade and best bid/ask
    async fn xticker(&self, params: Params) -> Result<ApiValue, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    async fn my_funds(&self, params: Params) -> Result<ApiValue, ExchangeError>;
    async fn my_orders(&self, params: Params) -> Result<ApiValue, ExchangeError>;
    async fn my_margins(&self, params: Params) -> Result<ApiValue, ExchangeError>;
}

#[async_trait]
pub trait WalletOperations {
    /// Fresh deposit address for the account
    async fn get_btc_address(&self, params: Params) -> Result<ApiValue, ExchangeError>;

    /// Transfer to another account on the venue
    async fn send_instant(&self, params: Params) -> Result<ApiValue, ExchangeError>;

    /// Withdraw to a bitcoin address
    async fn send_btc(&self, params: Params) -> Result<ApiValue, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer {
    async fn trade_enter(&self, params: Params) -> Result<ApiValue, ExchangeError>;
    async fn trade_advanced(&self, params: Params) -> Result<ApiValue, ExchangeError>;
    async fn trade_cancel(&self, params: Params) -> Result<ApiValue, ExchangeError>;
}

#[async_trait]
pub trait ExchangeConnector: MarketDataSource + AccountInfo + WalletOperations + OrderPlacer {}
