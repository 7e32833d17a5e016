use crate::core::kernel::{SignatureResult, Signer};
use crate::core::types::Params;
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;

/// Attaches the account login to authenticated requests
///
/// The API has no request signing: private endpoints take the plain
/// `user` and `pass` form fields over TLS.
#[derive(Debug, Clone)]
pub struct CampBxSigner {
    username: Secret<String>,
    password: Secret<String>,
}

impl CampBxSigner {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username: Secret::new(username),
            password: Secret::new(password),
        }
    }
}

impl Signer for CampBxSigner {
    fn sign_request(&self, _endpoint: &str, _params: &Params) -> SignatureResult {
        Ok((
            HashMap::new(),
            vec![
                ("user".to_string(), self.username.expose_secret().clone()),
                ("pass".to_string(), self.password.expose_secret().clone()),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_request_adds_login_fields() {
        let signer = CampBxSigner::new("alice".to_string(), "hunter2".to_string());
        let (headers, fields) = signer.sign_request("myfunds", &Params::new()).unwrap();

        assert!(headers.is_empty());
        assert_eq!(
            fields,
            vec![
                ("user".to_string(), "alice".to_string()),
                ("pass".to_string(), "hunter2".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let signer = CampBxSigner::new("alice".to_string(), "hunter2".to_string());
        assert!(!format!("{:?}", signer).contains("hunter2"));
    }
}
