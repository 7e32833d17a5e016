use crate::core::errors::ExchangeError;
use crate::core::types::ApiValue;
use serde_json::Value;

/// Decode a response body into an `ApiValue`
///
/// `serde_json` is built with `arbitrary_precision`, so every number keeps
/// its source literal no matter how many digits it carries. Only a body
/// that is not JSON is an error.
pub fn decode_value(body: &str) -> Result<ApiValue, ExchangeError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
    })?;
    Ok(to_api_value(value))
}

fn to_api_value(value: Value) -> ApiValue {
    match value {
        Value::Null => ApiValue::Null,
        Value::Bool(b) => ApiValue::Bool(b),
        Value::Number(n) => ApiValue::Number(n),
        Value::String(s) => ApiValue::String(s),
        Value::Array(items) => ApiValue::Array(items.into_iter().map(to_api_value).collect()),
        Value::Object(map) => ApiValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, to_api_value(v)))
                .collect(),
        ),
    }
}
