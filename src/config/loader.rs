//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::BridgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `chain.rpc_url`.
///
/// Hosted RPC URLs usually embed an API key, so they are kept out of the file.
pub const CHAIN_RPC_URL_ENV_VAR: &str = "BRIDGE_CHAIN_RPC_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse, apply environment overrides, and validate configuration text.
pub fn parse_config(content: &str) -> Result<BridgeConfig, ConfigError> {
    let mut config: BridgeConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config, env_lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Defaults only, still subject to env overrides and validation.
pub fn default_config() -> Result<BridgeConfig, ConfigError> {
    parse_config("")
}

/// Fields the current environment overrides, for startup logging.
pub fn overridden_fields() -> Vec<&'static str> {
    let mut fields = Vec::new();
    if chain_rpc_override(env_lookup).is_some() {
        fields.push("chain.rpc_url");
    }
    fields
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn chain_rpc_override(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(CHAIN_RPC_URL_ENV_VAR).filter(|u| !u.trim().is_empty())
}

fn apply_env_overrides(config: &mut BridgeConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = chain_rpc_override(lookup) {
        config.chain.rpc_url = url;
    }
}
