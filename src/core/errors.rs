use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("API error: {code} - {message}")]
    ApiError { code: u16, message: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Event loop error: {0}")]
    EventLoopError(String),
}

impl ExchangeError {
    /// Response body returned by the venue, when the failure carried one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
