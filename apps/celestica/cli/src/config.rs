use std::time::Duration;

use celestica::ClientConfig;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse};

/// Source service name sent with every call
pub const SERVICE_NAME: &str = "celestica-cli";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 50051;

/// Where and how the CLI talks to the vector service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub url: String,
    pub request_timeout: Option<Duration>,
}

impl FromEnv for CliConfig {
    /// Reads:
    /// - `CELESTICA_URL`: full address, wins over host/port
    /// - `GRPC_SERVER_HOST` (default `127.0.0.1`) and `GRPC_PORT` (default `50051`)
    /// - `CELESTICA_TIMEOUT_SECS`: optional per-request deadline
    fn from_env() -> Result<Self, ConfigError> {
        let url = match env_parse::<String>("CELESTICA_URL")? {
            Some(url) => url,
            None => {
                let host = env_or_default("GRPC_SERVER_HOST", DEFAULT_HOST);
                let port = env_parse::<u16>("GRPC_PORT")?.unwrap_or(DEFAULT_PORT);
                format!("http://{host}:{port}")
            }
        };

        let request_timeout = env_parse::<u64>("CELESTICA_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            url,
            request_timeout,
        })
    }
}

impl CliConfig {
    /// Apply command-line flags on top of the environment
    pub fn with_overrides(mut self, url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new().with_service_name(SERVICE_NAME);
        match self.request_timeout {
            Some(timeout) => config.with_request_timeout(timeout),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(
        url: Option<&'a str>,
        host: Option<&'a str>,
        port: Option<&'a str>,
        timeout: Option<&'a str>,
    ) -> [(&'static str, Option<&'a str>); 4] {
        [
            ("CELESTICA_URL", url),
            ("GRPC_SERVER_HOST", host),
            ("GRPC_PORT", port),
            ("CELESTICA_TIMEOUT_SECS", timeout),
        ]
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(vars(None, None, None, None), || {
            let config = CliConfig::from_env().unwrap();
            assert_eq!(config.url, "http://127.0.0.1:50051");
            assert_eq!(config.request_timeout, None);
        });
    }

    #[test]
    fn test_host_and_port() {
        temp_env::with_vars(
            vars(None, Some("vectors.internal"), Some("6000"), None),
            || {
                let config = CliConfig::from_env().unwrap();
                assert_eq!(config.url, "http://vectors.internal:6000");
            },
        );
    }

    #[test]
    fn test_url_wins_over_host_and_port() {
        temp_env::with_vars(
            vars(Some("http://[::1]:7000"), Some("ignored"), Some("1"), None),
            || {
                let config = CliConfig::from_env().unwrap();
                assert_eq!(config.url, "http://[::1]:7000");
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_vars(vars(None, None, Some("not-a-port"), None), || {
            let err = CliConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "GRPC_PORT"));
        });
    }

    #[test]
    fn test_timeout() {
        temp_env::with_vars(vars(None, None, None, Some("30")), || {
            let config = CliConfig::from_env().unwrap();
            assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
            assert_eq!(
                config.client_config().channel.request_timeout,
                Some(Duration::from_secs(30))
            );
        });
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig {
            url: "http://127.0.0.1:50051".to_string(),
            request_timeout: None,
        }
        .with_overrides(Some("localhost:6000".to_string()), Some(5));

        assert_eq!(config.url, "localhost:6000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_no_overrides() {
        let config = CliConfig {
            url: "http://127.0.0.1:50051".to_string(),
            request_timeout: Some(Duration::from_secs(1)),
        };
        assert_eq!(config.clone().with_overrides(None, None), config);
    }

    #[test]
    fn test_client_config_names_source() {
        let config = CliConfig {
            url: "http://127.0.0.1:50051".to_string(),
            request_timeout: None,
        };
        let client_config = config.client_config();
        assert_eq!(client_config.service_name.as_deref(), Some(SERVICE_NAME));
        assert_eq!(client_config.channel.request_timeout, None);
    }
}
