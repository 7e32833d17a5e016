use crate::core::config::DEFAULT_TIMEOUT_SECONDS;
use crate::core::errors::ExchangeError;
use crate::core::kernel::codec;
use crate::core::kernel::signer::Signer;
use crate::core::types::{ApiValue, Params};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::sync::Arc;
use tracing::{instrument, trace};

/// REST client trait for form-encoded POST APIs
///
/// Implementations own URL construction, credential attachment and
/// response decoding so that venue code only deals in endpoints and
/// parameters.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Full URL that a request to `endpoint` is sent to
    fn url_for(&self, endpoint: &str) -> String;

    /// Make a form-encoded POST request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `params` - Form parameters
    /// * `authenticated` - Whether to attach credentials
    ///
    /// # Returns
    /// The response body decoded with decimal numbers
    async fn post_form(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<ApiValue, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API, endpoint paths are appended verbatim
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Appended after the endpoint path (e.g. `.php`)
    pub path_suffix: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            path_suffix: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("campbx-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the suffix appended to every endpoint path
    pub fn with_path_suffix(mut self, path_suffix: String) -> Self {
        self.path_suffix = path_suffix;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    ///
    /// The underlying `reqwest::Client` keeps its connection pool for the
    /// lifetime of the returned value and all of its clones.
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Configuration this client was built with
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Whether authenticated requests can be signed
    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Build the form body, merging signer fields over caller parameters
    fn build_form(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<(Vec<(String, String)>, Params), ExchangeError> {
        let mut form = params.clone();
        let mut headers = Vec::new();

        if authenticated {
            let Some(signer) = &self.signer else {
                return Err(ExchangeError::AuthError(format!(
                    "Endpoint '{}' requires credentials but none were configured",
                    endpoint
                )));
            };

            let (signed_headers, fields) = signer.sign_request(endpoint, params)?;
            headers.extend(signed_headers);
            form.extend(fields);
        }

        Ok((headers, form))
    }

    /// Read the response body and check the status
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn read_body(&self, response: Response) -> Result<String, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            Ok(response_text)
        } else {
            Err(ExchangeError::ApiError {
                code: status.as_u16(),
                message: response_text,
            })
        }
    }

    /// Send a form POST and return the raw body of a successful response
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, param_count = params.len()))]
    async fn make_request(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<String, ExchangeError> {
        let url = self.url_for(endpoint);
        let (headers, form) = self.build_form(endpoint, params, authenticated)?;

        let mut request = self.client.post(&url).form(&form);
        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.read_body(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url, endpoint, self.config.path_suffix
        )
    }

    async fn post_form(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<ApiValue, ExchangeError> {
        let body = self.make_request(endpoint, params, authenticated).await?;
        codec::decode_value(&body)
    }
}
