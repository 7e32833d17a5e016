use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::campbx::connector::CampBxConnector;
use crate::exchanges::campbx::signer::CampBxSigner;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://campbx.com/api/";
pub const PATH_SUFFIX: &str = ".php";
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Build the transport for `config`
///
/// A signer is attached only when both username and password are set;
/// without one, private endpoints fail before anything is sent.
pub fn build_rest_client(config: &ExchangeConfig) -> Result<ReqwestRest, ExchangeError> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let rest_config = RestClientConfig::new(base_url, "campbx".to_string())
        .with_path_suffix(PATH_SUFFIX.to_string())
        .with_user_agent(USER_AGENT.to_string())
        .with_timeout(config.timeout_seconds);

    let mut rest_builder = RestClientBuilder::new(rest_config);

    if config.has_credentials() {
        let signer = Arc::new(CampBxSigner::new(
            config.username().to_string(),
            config.password().to_string(),
        ));
        rest_builder = rest_builder.with_signer(signer);
    }

    rest_builder.build()
}

/// Create a CampBX connector
pub fn build_connector(config: ExchangeConfig) -> Result<CampBxConnector<ReqwestRest>, ExchangeError> {
    let rest = build_rest_client(&config)?;
    Ok(CampBxConnector::new(rest, config.debug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::RestClient;

    #[test]
    fn test_default_urls() {
        let rest = build_rest_client(&ExchangeConfig::read_only()).unwrap();

        assert_eq!(rest.url_for("xdepth"), "https://campbx.com/api/xdepth.php");
        assert_eq!(rest.config().user_agent, "Mozilla/5.0");
        assert!(!rest.has_signer());
    }

    #[test]
    fn test_credentials_attach_signer() {
        let config = ExchangeConfig::new("alice".to_string(), "hunter2".to_string())
            .base_url("http://127.0.0.1:9/api/".to_string())
            .timeout_seconds(3);
        let rest = build_rest_client(&config).unwrap();

        assert!(rest.has_signer());
        assert_eq!(rest.config().timeout_seconds, 3);
        assert_eq!(rest.url_for("tradeadv"), "http://127.0.0.1:9/api/tradeadv.php");
    }

    #[test]
    fn test_build_connector_keeps_debug_flag() {
        let connector = build_connector(ExchangeConfig::read_only().debug(true)).unwrap();
        assert!(connector.rest().debug_mode());

        connector.set_debug_mode(false);
        assert!(!connector.rest().debug_mode());
    }
}
