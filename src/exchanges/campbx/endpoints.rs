use crate::core::errors::ExchangeError;
use std::fmt;
use std::str::FromStr;

/// Static description of one remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Logical operation name
    pub name: &'static str,
    /// Path segment between the API base URL and `.php`
    pub path: &'static str,
    /// Whether `user` and `pass` must be attached
    pub requires_auth: bool,
}

/// Every operation the API exposes, in the order of [`Endpoint`]
pub const ENDPOINTS: [EndpointDescriptor; 11] = [
    EndpointDescriptor { name: "xdepth", path: "xdepth", requires_auth: false },
    EndpointDescriptor { name: "xticker", path: "xticker", requires_auth: false },
    EndpointDescriptor { name: "my_funds", path: "myfunds", requires_auth: true },
    EndpointDescriptor { name: "my_orders", path: "myorders", requires_auth: true },
    EndpointDescriptor { name: "my_margins", path: "mymargins", requires_auth: true },
    EndpointDescriptor { name: "get_btc_address", path: "getbtcaddr", requires_auth: true },
    EndpointDescriptor { name: "send_instant", path: "sendinstant", requires_auth: true },
    EndpointDescriptor { name: "send_btc", path: "sendbtc", requires_auth: true },
    EndpointDescriptor { name: "trade_cancel", path: "tradecancel", requires_auth: true },
    EndpointDescriptor { name: "trade_enter", path: "tradeenter", requires_auth: true },
    EndpointDescriptor { name: "trade_advanced", path: "tradeadv", requires_auth: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    XDepth,
    XTicker,
    MyFunds,
    MyOrders,
    MyMargins,
    GetBtcAddress,
    SendInstant,
    SendBtc,
    TradeCancel,
    TradeEnter,
    TradeAdvanced,
}

impl Endpoint {
    pub const ALL: [Self; 11] = [
        Self::XDepth,
        Self::XTicker,
        Self::MyFunds,
        Self::MyOrders,
        Self::MyMargins,
        Self::GetBtcAddress,
        Self::SendInstant,
        Self::SendBtc,
        Self::TradeCancel,
        Self::TradeEnter,
        Self::TradeAdvanced,
    ];

    pub const fn descriptor(self) -> &'static EndpointDescriptor {
        &ENDPOINTS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub const fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub const fn requires_auth(self) -> bool {
        self.descriptor().requires_auth
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| ExchangeError::InvalidParameters(format!("Unknown endpoint: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (endpoint, descriptor) in Endpoint::ALL.iter().zip(ENDPOINTS.iter()) {
            assert_eq!(endpoint.descriptor(), descriptor);
        }
    }

    #[test]
    fn test_only_market_data_is_public() {
        let public: Vec<_> = Endpoint::ALL
            .into_iter()
            .filter(|endpoint| !endpoint.requires_auth())
            .collect();
        assert_eq!(public, vec![Endpoint::XDepth, Endpoint::XTicker]);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::GetBtcAddress.path(), "getbtcaddr");
        assert_eq!(Endpoint::TradeAdvanced.path(), "tradeadv");
        assert_eq!(Endpoint::MyFunds.path(), "myfunds");
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("send_btc".parse::<Endpoint>().unwrap(), Endpoint::SendBtc);
        assert_eq!(Endpoint::TradeEnter.to_string(), "trade_enter");
        assert!(matches!(
            "sendbtc".parse::<Endpoint>(),
            Err(ExchangeError::InvalidParameters(_))
        ));
    }
}
