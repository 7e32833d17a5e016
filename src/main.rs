use campbx::core::config::{ConfigError, ExchangeConfig};
use campbx::{CampBx, Endpoint, Params};
use tracing::{info, warn, Level};

/// Usage: `campbx [endpoint] [key=value ...]`
///
/// Credentials come from `CAMPBX_USERNAME` / `CAMPBX_PASSWORD` (or a `.env`
/// file); without them only `xdepth` and `xticker` return data.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mut args = std::env::args().skip(1);
    let endpoint: Endpoint = args.next().as_deref().unwrap_or("xticker").parse()?;

    let mut params = Params::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", arg))?;
        params.insert(key, value);
    }

    if endpoint.requires_auth() && !config.has_credentials() {
        warn!(endpoint = %endpoint, "no credentials configured, the request will fail");
    }

    let client = CampBx::new(config)?;
    info!(endpoint = %endpoint, "requesting");
    let response = client.call(endpoint, params);

    if response.is_empty() {
        warn!(endpoint = %endpoint, "empty response");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn load_config() -> Result<ExchangeConfig, ConfigError> {
    #[cfg(feature = "env-file")]
    let loaded = ExchangeConfig::from_env_file("CAMPBX");
    #[cfg(not(feature = "env-file"))]
    let loaded = ExchangeConfig::from_env("CAMPBX");

    match loaded {
        // no credentials, public endpoints only
        Err(ConfigError::MissingEnvironmentVariable(_)) => {
            ExchangeConfig::read_only_from_env("CAMPBX")
        }
        other => other,
    }
}
