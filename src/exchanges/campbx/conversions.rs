use crate::core::errors::ExchangeError;
use crate::core::types::{ApiValue, Price, Quantity};
use crate::exchanges::campbx::types::{Depth, DepthLevel, Ticker};

fn decimal_field(value: &ApiValue, key: &str) -> Result<rust_decimal::Decimal, ExchangeError> {
    value[key].as_decimal().ok_or_else(|| {
        ExchangeError::DeserializationError(format!("Missing or non-numeric field '{}'", key))
    })
}

fn convert_levels(value: &ApiValue, key: &str) -> Result<Vec<DepthLevel>, ExchangeError> {
    let rows = value[key].as_array().ok_or_else(|| {
        ExchangeError::DeserializationError(format!("Field '{}' is not a sequence", key))
    })?;

    rows.iter()
        .map(|row| {
            let price = row[0].as_decimal();
            let quantity = row[1].as_decimal();
            match (price, quantity) {
                (Some(price), Some(quantity)) => Ok(DepthLevel {
                    price: Price::new(price),
                    quantity: Quantity::new(quantity).map_err(|e| {
                        ExchangeError::DeserializationError(format!("{} level: {}", key, e))
                    })?,
                }),
                _ => Err(ExchangeError::DeserializationError(format!(
                    "Malformed {} level: {}",
                    key, row
                ))),
            }
        })
        .collect()
}

/// Convert an `xdepth` response into a typed book
pub fn convert_depth(value: &ApiValue) -> Result<Depth, ExchangeError> {
    Ok(Depth {
        bids: convert_levels(value, "Bids")?,
        asks: convert_levels(value, "Asks")?,
    })
}

/// Convert an `xticker` response into a typed quote
pub fn convert_ticker(value: &ApiValue) -> Result<Ticker, ExchangeError> {
    Ok(Ticker {
        last_trade: Price::new(decimal_field(value, "Last Trade")?),
        best_bid: Price::new(decimal_field(value, "Best Bid")?),
        best_ask: Price::new(decimal_field(value, "Best Ask")?),
    })
}
