use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::{ApiValue, Params};
use crate::exchanges::campbx::endpoints::Endpoint;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Thin wrapper around `RestClient` that turns an [`Endpoint`] plus
/// parameters into a request
///
/// Clones share the rest client and the debug flag.
pub struct CampBxRestClient<R: RestClient> {
    client: Arc<R>,
    debug: Arc<AtomicBool>,
}

impl<R: RestClient> Clone for CampBxRestClient<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            debug: Arc::clone(&self.debug),
        }
    }
}

impl<R: RestClient> CampBxRestClient<R> {
    pub fn new(client: R, debug: bool) -> Self {
        Self {
            client: Arc::new(client),
            debug: Arc::new(AtomicBool::new(debug)),
        }
    }

    pub fn inner(&self) -> &R {
        &self.client
    }

    /// Turn per-request debug lines on or off
    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_mode(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    fn log_request(&self, endpoint: Endpoint, params: &Params) {
        if self.debug_mode() {
            // credentials are merged by the transport, after this point
            debug!(endpoint = %endpoint, "Setting url to {}", self.client.url_for(endpoint.path()));
            debug!(endpoint = %endpoint, "Post params: {}", params);
        }
    }

    /// Send one request and report exactly what went wrong, if anything
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn dispatch(
        &self,
        endpoint: Endpoint,
        params: Params,
    ) -> Result<ApiValue, ExchangeError> {
        self.log_request(endpoint, &params);
        self.client
            .post_form(endpoint.path(), &params, endpoint.requires_auth())
            .await
    }

    /// Send one request, collapsing every failure into the empty mapping
    pub async fn request(&self, endpoint: Endpoint, params: Params) -> ApiValue {
        collapse(endpoint, self.dispatch(endpoint, params).await)
    }
}

/// Log a failed request and replace it with the empty mapping
pub fn collapse(endpoint: Endpoint, result: Result<ApiValue, ExchangeError>) -> ApiValue {
    match result {
        Ok(value) => value,
        Err(err) => {
            match err.response_body() {
                Some(body) => {
                    error!(endpoint = %endpoint, error = %err, body = %body, "Error making request");
                }
                None => error!(endpoint = %endpoint, error = %err, "Error making request"),
            }
            ApiValue::empty()
        }
    }
}
