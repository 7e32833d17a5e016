use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub username: Secret<String>,
    pub password: Secret<String>,
    pub base_url: Option<String>,
    pub debug: bool,
    pub timeout_seconds: u64,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 5)?;
        state.serialize_field("username", "[REDACTED]")?;
        state.serialize_field("password", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("debug", &self.debug)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            username: String,
            password: String,
            base_url: Option<String>,
            #[serde(default)]
            debug: bool,
            timeout_seconds: Option<u64>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            username: Secret::new(helper.username),
            password: Secret::new(helper.password),
            base_url: helper.base_url,
            debug: helper.debug,
            timeout_seconds: helper.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with account credentials
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self {
            username: Secret::new(username),
            password: Secret::new(password),
            base_url: None,
            debug: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{EXCHANGE}_USERNAME` (e.g., `CAMPBX_USERNAME`)
    /// - `{EXCHANGE}_PASSWORD` (e.g., `CAMPBX_PASSWORD`)
    /// - `{EXCHANGE}_BASE_URL` (optional)
    /// - `{EXCHANGE}_DEBUG` (optional, defaults to false)
    /// - `{EXCHANGE}_TIMEOUT_SECONDS` (optional, defaults to 30)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let prefix = exchange_prefix.to_uppercase();
        let username_var = format!("{}_USERNAME", prefix);
        let password_var = format!("{}_PASSWORD", prefix);

        let username = env::var(&username_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(username_var))?;

        let password = env::var(&password_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(password_var))?;

        Self::new(username, password).with_env_settings(&prefix)
    }

    /// Public-endpoint configuration that still honours the optional
    /// `{EXCHANGE}_BASE_URL`, `{EXCHANGE}_DEBUG` and
    /// `{EXCHANGE}_TIMEOUT_SECONDS` variables
    pub fn read_only_from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::read_only().with_env_settings(&exchange_prefix.to_uppercase())
    }

    fn with_env_settings(mut self, prefix: &str) -> Result<Self, ConfigError> {
        self.debug = env::var(format!("{}_DEBUG", prefix))
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let timeout_var = format!("{}_TIMEOUT_SECONDS", prefix);
        if let Ok(raw) = env::var(&timeout_var) {
            self.timeout_seconds = raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidConfiguration(format!("{}='{}': {}", timeout_var, raw, e))
            })?;
        }

        self.base_url = env::var(format!("{}_BASE_URL", prefix)).ok();
        Ok(self)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(exchange_prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(
        exchange_prefix: &str,
        env_file_path: &str,
    ) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // no .env file, fall through to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Configuration for the public market data endpoints only
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Check if this configuration has credentials for authenticated endpoints
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.expose_secret().is_empty() && !self.password.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Start the client with debug logging on or off
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Get username (use carefully - exposes secret)
    pub fn username(&self) -> &str {
        self.username.expose_secret()
    }

    /// Get password (use carefully - exposes secret)
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
