use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] ConfigError),
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// API server configuration
    pub api: ApiConfig,

    /// DexScreener pair search
    pub dexscreener: DexScreenerConfig,

    /// GoPlus token and address security scanner
    pub goplus: GoPlusConfig,

    /// Etherscan balance and transaction history
    pub etherscan: EtherscanConfig,

    /// Optional generative narrator (Gemini)
    pub narrator: NarratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexScreenerConfig {
    /// DexScreener API base URL
    pub api_base_url: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoPlusConfig {
    /// GoPlus API base URL
    pub api_base_url: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtherscanConfig {
    /// Etherscan API key (requests are still sent without one)
    pub api_key: String,

    /// Etherscan API base URL
    pub api_base_url: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Number of recent transactions requested per wallet
    pub tx_page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarratorConfig {
    /// Allow the generative narrator at all
    pub enabled: bool,

    /// Gemini API key; empty means unconfigured
    pub api_key: String,

    /// Gemini API base URL
    pub api_base_url: String,

    /// Model name, e.g. "gemini-2.0-flash"
    pub model: String,

    /// How long analysis waits for the narrator before using the deterministic report
    pub timeout_ms: u64,

    /// Transport timeout for the underlying HTTP request, in seconds
    pub request_timeout_seconds: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            dexscreener: DexScreenerConfig {
                api_base_url: "https://api.dexscreener.com".to_string(),
                request_timeout_seconds: 10,
            },
            goplus: GoPlusConfig {
                api_base_url: "https://api.gopluslabs.io".to_string(),
                request_timeout_seconds: 10,
            },
            etherscan: EtherscanConfig {
                api_key: "".to_string(), // Set via SMRE__ETHERSCAN__API_KEY
                api_base_url: "https://api.etherscan.io".to_string(),
                request_timeout_seconds: 10,
                tx_page_size: 100,
            },
            narrator: NarratorConfig {
                enabled: true,
                api_key: "".to_string(), // Set via SMRE__NARRATOR__API_KEY
                api_base_url: "https://generativelanguage.googleapis.com".to_string(),
                model: "gemini-2.0-flash".to_string(),
                timeout_ms: 3000,
                request_timeout_seconds: 30,
            },
        }
    }
}

impl EtherscanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_seconds == 0 {
            return Err(ConfigurationError::InvalidValue(
                "Etherscan request timeout must be greater than 0".to_string(),
            ));
        }

        if self.tx_page_size == 0 {
            return Err(ConfigurationError::InvalidValue(
                "Etherscan tx_page_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl NarratorConfig {
    /// The narrator is only called when enabled and an API key is present
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigurationError::InvalidValue(
                "Narrator timeout must be greater than 0".to_string(),
            ));
        }

        if self.is_configured() && self.model.is_empty() {
            return Err(ConfigurationError::InvalidValue(
                "Narrator model is required when the narrator is configured".to_string(),
            ));
        }

        Ok(())
    }
}

impl SystemConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config.toml")
    }

    /// Load configuration from a specific file path
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let mut config_builder = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&SystemConfig::default())?);

        // Add config file if it exists
        if config_path.as_ref().exists() {
            info!(
                "Loading configuration from: {}",
                config_path.as_ref().display()
            );
            config_builder = config_builder.add_source(File::from(config_path.as_ref()));
        } else {
            debug!("Config file not found, using defaults and environment variables");
        }

        // Add environment variables with prefix
        config_builder = config_builder.add_source(
            Environment::with_prefix("SMRE")
                .try_parsing(true)
                .separator("__"),
        );

        let system_config: SystemConfig = config_builder.build()?.try_deserialize()?;

        if system_config.narrator.enabled && system_config.narrator.api_key.is_empty() {
            warn!("Narrator API key not set, analyses will use the deterministic report");
        }

        system_config.validate()?;

        Ok(system_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.port == 0 {
            return Err(ConfigurationError::InvalidValue(
                "API port cannot be 0".to_string(),
            ));
        }

        for (name, timeout) in [
            ("DexScreener", self.dexscreener.request_timeout_seconds),
            ("GoPlus", self.goplus.request_timeout_seconds),
            ("Narrator", self.narrator.request_timeout_seconds),
        ] {
            if timeout == 0 {
                return Err(ConfigurationError::InvalidValue(format!(
                    "{} request timeout must be greater than 0",
                    name
                )));
            }
        }

        self.etherscan.validate()?;
        self.narrator.validate()?;

        Ok(())
    }
}

/// GoPlus chain id for a DexScreener chain name.
///
/// Ethereum maps to "1"; every other chain is scanned as BNB Smart Chain.
pub fn chain_id_for_goplus(dexscreener_chain: &str) -> &'static str {
    match dexscreener_chain {
        "ethereum" => "1",
        _ => "56",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SystemConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.narrator.timeout_ms, 3000);
        assert_eq!(config.etherscan.tx_page_size, 100);
    }

    #[test]
    fn test_narrator_needs_key() {
        let mut narrator = SystemConfig::default().narrator;
        assert!(!narrator.is_configured());

        narrator.api_key = "key".to_string();
        assert!(narrator.is_configured());

        narrator.enabled = false;
        assert!(!narrator.is_configured());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = SystemConfig::default();
        config.api.port = 0;
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.narrator.timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.etherscan.tx_page_size = 0;
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.goplus.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SystemConfig::load_from_path("does/not/exist.toml").unwrap();
        assert_eq!(config.dexscreener.api_base_url, "https://api.dexscreener.com");
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        std::env::set_var("SMRE__ETHERSCAN__TX_PAGE_SIZE", "25");
        std::env::set_var("SMRE__NARRATOR__MODEL", "gemini-test");
        let config = SystemConfig::load_from_path("does/not/exist.toml");
        std::env::remove_var("SMRE__ETHERSCAN__TX_PAGE_SIZE");
        std::env::remove_var("SMRE__NARRATOR__MODEL");

        let config = config.unwrap();
        assert_eq!(config.etherscan.tx_page_size, 25);
        assert_eq!(config.narrator.model, "gemini-test");
    }

    #[test]
    fn test_chain_id_for_goplus() {
        assert_eq!(chain_id_for_goplus("ethereum"), "1");
        assert_eq!(chain_id_for_goplus("bsc"), "56");
        assert_eq!(chain_id_for_goplus("base"), "56");
    }
}
