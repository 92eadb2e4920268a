//! Network selection and endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default host for Conflux Core Space mainnet.
pub const MAINNET_HOST: &str = "https://api.confluxscan.org";

/// Default host for Conflux Core Space testnet.
pub const TESTNET_HOST: &str = "https://api-testnet.confluxscan.org";

/// Target network of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// The explorer API host serving this network.
    pub const fn default_host(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_HOST,
            Self::Testnet => TESTNET_HOST,
        }
    }
}

/// Client configuration: `{ target, apiKey?, host? }`.
///
/// Deserializes from the same camelCase shape other ConfluxScan SDKs accept,
/// so it can be loaded straight from a JSON or TOML settings file.
///
/// ```
/// use confluxscan_client::{ApiConfig, Network};
///
/// let config: ApiConfig = serde_json::from_str(r#"{"target":"testnet","apiKey":"k"}"#).unwrap();
/// assert_eq!(config.target, Network::Testnet);
/// assert_eq!(config.base_url(), "https://api-testnet.confluxscan.org");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub target: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl ApiConfig {
    pub fn mainnet() -> Self {
        Self::default()
    }

    pub fn testnet() -> Self {
        Self {
            target: Network::Testnet,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Resolves the base URL. An explicit, non-empty `host` wins over the target's default.
    pub fn base_url(&self) -> &str {
        match self.host.as_deref().map(|h| h.trim_end_matches('/')) {
            Some(host) if !host.is_empty() => host,
            _ => self.target.default_host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_default_hosts() {
        assert_eq!(ApiConfig::mainnet().base_url(), MAINNET_HOST);
        assert_eq!(ApiConfig::testnet().base_url(), TESTNET_HOST);
    }

    #[test]
    fn host_overrides_target() {
        let config = ApiConfig::testnet().with_host("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");

        let config = ApiConfig::mainnet().with_host("");
        assert_eq!(config.base_url(), MAINNET_HOST);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::mainnet());

        let config: ApiConfig =
            serde_json::from_str(r#"{"apiKey":"secret","host":"https://scan.example"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url(), "https://scan.example");
    }
}
