//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Target contract settings.
    pub contract: ContractConfig,

    /// Chain RPC used for gas estimation and gas price.
    pub chain: ChainConfig,

    /// Wallet provider endpoint.
    pub wallet: WalletConfig,

    /// Block explorer used for transaction links.
    pub explorer: ExplorerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the token contract.
    pub address: String,

    /// Recipient of every token minted by a batch mint.
    pub batch_recipient: String,

    /// Most tokens a single batch mint may request.
    pub max_batch_size: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: "0xd73762e63f50E184358D02d3620BCa8c5c929e12".to_string(),
            batch_recipient: "0x9a3f9764B21adAF3C6fDf6f947e6D3340a3F8AC5".to_string(),
            max_batch_size: 500,
        }
    }
}

/// Chain RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Disable to run without a wallet provider.
    pub enabled: bool,

    /// JSON-RPC endpoint that holds the accounts (node or signer).
    pub rpc_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Account to act as, before any account request has run.
    pub selected_address: Option<String>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rpc_url: "http://localhost:8545".to_string(),
            rpc_timeout_secs: 60,
            selected_address: None,
        }
    }
}

/// Block explorer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Prefix the transaction hash is appended to.
    pub tx_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            tx_url: "https://ropsten.etherscan.io/tx/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: BridgeConfig = toml::from_str("").unwrap();
        assert_eq!(config.explorer.tx_url, "https://ropsten.etherscan.io/tx/");
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert!(config.wallet.enabled);
        assert!(config.wallet.selected_address.is_none());
    }

    #[test]
    fn test_partial_section_override() {
        let config: BridgeConfig = toml::from_str(
            r#"
            [chain]
            rpc_url = "https://eth.example.org"

            [wallet]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.rpc_url, "https://eth.example.org");
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert!(!config.wallet.enabled);
        assert_eq!(
            config.contract.address,
            "0xd73762e63f50E184358D02d3620BCa8c5c929e12"
        );
    }
}
