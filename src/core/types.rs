use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypesError {
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] rust_decimal::Error),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Decoded JSON response with every number kept as its exact source literal
///
/// Numbers never pass through a binary float, so `0.1` stays `0.1` and a
/// literal wider than a `Decimal` survives untouched. The empty mapping
/// (also the `Default`) is what the lenient client surfaces return on any
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<ApiValue>),
    Object(BTreeMap<String, ApiValue>),
}

static NULL: ApiValue = ApiValue::Null;

impl Serialize for ApiValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl Default for ApiValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl ApiValue {
    /// The empty mapping
    pub const fn empty() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// True for the empty mapping, the empty sequence and `null`
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Object(map) => map.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Numeric view of the value
    ///
    /// The venue quotes most amounts as JSON strings, so numeric strings are
    /// accepted as well as JSON numbers. Literals with more than 28
    /// fractional digits are rounded; `None` if the magnitude does not fit
    /// a `Decimal`. Use [`ApiValue::as_number`] for the exact literal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        let text = match self {
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.trim().to_string(),
            _ => return None,
        };
        parse_decimal(&text).or_else(|| Decimal::from_str(&text).ok())
    }

    pub const fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Parse a decimal literal in plain or scientific notation without going
/// through a binary float
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str_exact(text).ok()
    }
}

impl std::ops::Index<&str> for ApiValue {
    type Output = Self;

    fn index(&self, key: &str) -> &Self {
        self.get(key).unwrap_or(&NULL)
    }
}

impl std::ops::Index<usize> for ApiValue {
    type Output = Self;

    fn index(&self, index: usize) -> &Self {
        match self {
            Self::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl fmt::Display for ApiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Form parameters for one request
///
/// Every call owns its own `Params`; credentials are merged into a copy at
/// send time, never into the caller's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Type-safe price representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Price {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Decimal::from_str_exact(s)?))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe quantity representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Quantity {
    pub fn new(value: Decimal) -> Result<Self, TypesError> {
        if value.is_sign_negative() {
            return Err(TypesError::InvalidQuantity(format!(
                "quantity cannot be negative: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s)
            .map_err(|e| TypesError::InvalidQuantity(format!("'{}': {}", s, e)))?;
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn num(literal: &str) -> ApiValue {
        ApiValue::Number(serde_json::Number::from_str(literal).unwrap())
    }

    fn ticker() -> ApiValue {
        let mut map = BTreeMap::new();
        map.insert(
            "Best Bid".to_string(),
            ApiValue::String("123.456789012345".to_string()),
        );
        map.insert("Last Trade".to_string(), num("101.5"));
        map.insert("Note".to_string(), ApiValue::String("n/a".to_string()));
        ApiValue::Object(map)
    }

    #[test]
    fn test_default_is_empty_mapping() {
        let value = ApiValue::default();
        assert_eq!(value, ApiValue::empty());
        assert!(value.is_empty());
        assert!(value.as_object().is_some());
    }

    #[test]
    fn test_as_decimal_accepts_numeric_strings() {
        let value = ticker();
        assert_eq!(value["Best Bid"].as_decimal(), Some(dec!(123.456789012345)));
        assert_eq!(value["Last Trade"].as_decimal(), Some(dec!(101.5)));
        assert_eq!(value["Note"].as_decimal(), None);
        assert!(value["Missing"].is_null());
    }

    #[test]
    fn test_parse_decimal_scientific() {
        assert_eq!(parse_decimal("1.5e-3"), Some(dec!(0.0015)));
        assert_eq!(parse_decimal("42"), Some(dec!(42)));
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_display_keeps_precision() {
        let value = ApiValue::Array(vec![num("0.1"), ApiValue::Bool(true)]);
        assert_eq!(value.to_string(), "[0.1,true]");
    }

    #[test]
    fn test_as_decimal_rounds_literals_wider_than_decimal() {
        let wide = num("0.10000000000000000000000000001");
        assert_eq!(wide.as_decimal(), Some(dec!(0.1)));
        assert_eq!(
            wide.as_number().map(ToString::to_string).as_deref(),
            Some("0.10000000000000000000000000001")
        );

        assert_eq!(num("1e400").as_decimal(), None);
        assert!(num("1e400").as_number().is_some());
    }

    #[test]
    fn test_params_are_independent_values() {
        let base = Params::new().with("OrderID", 42);
        let mut copy = base.clone();
        copy.insert("user", "alice");

        assert_eq!(base.len(), 1);
        assert!(!base.contains_key("user"));
        assert_eq!(copy.get("OrderID"), Some("42"));
        assert_eq!(base.to_string(), "{OrderID: 42}");
    }

    #[test]
    fn test_quantity_rejects_negative() {
        assert!(Quantity::from_str("-1").is_err());
        assert_eq!(Quantity::from_str("0.5").unwrap().value(), dec!(0.5));
        assert_eq!(Price::from_str("650.01").unwrap().to_string(), "650.01");
    }
}
