use crate::core::types::{OrderSide, Params, Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One price level of the `xdepth` book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Price,
    pub quantity: Quantity,
}

/// Order book snapshot returned by `xdepth`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
}

impl Depth {
    pub fn best_bid(&self) -> Option<&DepthLevel> {
        self.bids.iter().max_by_key(|level| level.price)
    }

    pub fn best_ask(&self) -> Option<&DepthLevel> {
        self.asks.iter().min_by_key(|level| level.price)
    }
}

/// Quote returned by `xticker`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub last_trade: Price,
    pub best_bid: Price,
    pub best_ask: Price,
}

impl Ticker {
    pub fn spread(&self) -> rust_decimal::Decimal {
        self.best_ask.value() - self.best_bid.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillType {
    Incremental,
    AllOrNothing,
    FillOrKill,
}

impl FillType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incremental => "Incremental",
            Self::AllOrNothing => "AON",
            Self::FillOrKill => "FOK",
        }
    }
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limit order for `tradeenter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickOrder {
    pub side: OrderSide,
    pub quantity: Quantity,
    pub price: Price,
}

impl QuickOrder {
    pub const fn buy(quantity: Quantity, price: Price) -> Self {
        Self {
            side: OrderSide::Buy,
            quantity,
            price,
        }
    }

    pub const fn sell(quantity: Quantity, price: Price) -> Self {
        Self {
            side: OrderSide::Sell,
            quantity,
            price,
        }
    }
}

impl From<QuickOrder> for Params {
    fn from(order: QuickOrder) -> Self {
        let mode = match order.side {
            OrderSide::Buy => "QuickBuy",
            OrderSide::Sell => "QuickSell",
        };
        Self::new()
            .with("TradeMode", mode)
            .with("Quantity", order.quantity)
            .with("Price", order.price)
    }
}

/// Order with fill, dark pool and expiry options for `tradeadv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedOrder {
    pub side: OrderSide,
    pub quantity: Quantity,
    pub price: Price,
    pub fill_type: Option<FillType>,
    pub dark_pool: Option<bool>,
    /// Expiry as accepted by the venue (e.g. `2013-12-31 23:59:59`)
    pub expiry: Option<String>,
}

impl AdvancedOrder {
    pub const fn new(side: OrderSide, quantity: Quantity, price: Price) -> Self {
        Self {
            side,
            quantity,
            price,
            fill_type: None,
            dark_pool: None,
            expiry: None,
        }
    }

    pub const fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = Some(fill_type);
        self
    }

    pub const fn with_dark_pool(mut self, dark_pool: bool) -> Self {
        self.dark_pool = Some(dark_pool);
        self
    }

    pub fn with_expiry(mut self, expiry: String) -> Self {
        self.expiry = Some(expiry);
        self
    }
}

impl From<AdvancedOrder> for Params {
    fn from(order: AdvancedOrder) -> Self {
        let mode = match order.side {
            OrderSide::Buy => "AdvancedBuy",
            OrderSide::Sell => "AdvancedSell",
        };
        let mut params = Self::new()
            .with("TradeMode", mode)
            .with("Quantity", order.quantity)
            .with("Price", order.price);

        if let Some(fill_type) = order.fill_type {
            params.insert("FillType", fill_type);
        }
        if let Some(dark_pool) = order.dark_pool {
            params.insert("DarkPool", if dark_pool { "Yes" } else { "No" });
        }
        if let Some(expiry) = order.expiry {
            params.insert("Expiry", expiry);
        }
        params
    }
}

/// Cancellation for `tradecancel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    pub side: OrderSide,
    pub order_id: String,
}

impl From<CancelOrder> for Params {
    fn from(cancel: CancelOrder) -> Self {
        Self::new()
            .with("Type", cancel.side)
            .with("OrderID", cancel.order_id)
    }
}

/// Withdrawal to a bitcoin address for `sendbtc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBtc {
    pub address: String,
    pub amount: Quantity,
}

impl From<SendBtc> for Params {
    fn from(send: SendBtc) -> Self {
        Self::new()
            .with("BTCTo", send.address)
            .with("BTCAmt", send.amount)
    }
}

/// Transfer to another venue account for `sendinstant`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendInstant {
    pub cbx_code: String,
    pub amount: Quantity,
}

impl From<SendInstant> for Params {
    fn from(send: SendInstant) -> Self {
        Self::new()
            .with("CBXCode", send.cbx_code)
            .with("BTCAmt", send.amount)
    }
}
