use crate::core::errors::ExchangeError;
use crate::core::types::Params;
use std::collections::HashMap;

/// Result type for signing operations: (headers, form fields)
pub type SignatureResult = Result<(HashMap<String, String>, Vec<(String, String)>), ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations return the extra headers and form fields an
/// authenticated request must carry. The transport merges the returned
/// fields into its own copy of the request parameters.
pub trait Signer: Send + Sync {
    /// Sign a request
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path
    /// * `params` - Caller-supplied form parameters
    fn sign_request(&self, endpoint: &str, params: &Params) -> SignatureResult;
}
