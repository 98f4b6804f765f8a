//! Blockchain RPC client with timeout and failover handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoints (primary + failovers)
//! - Estimate gas for a contract call from a given sender
//! - Query the current network gas price
//! - Handle timeouts and network errors without panicking

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::ChainConfig;

/// Gas queries the bridge needs from the network.
pub trait ChainClient: Send + Sync {
    /// Estimate the gas a call to `to` with `data` would use when sent by `from`.
    fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = BlockchainResult<u64>> + Send;

    /// Current suggested gas price in wei.
    fn gas_price(&self) -> impl Future<Output = BlockchainResult<u128>> + Send;
}

/// Blockchain RPC client wrapper with failover support.
#[derive(Clone)]
pub struct BlockchainClient {
    /// List of providers (primary + failovers).
    providers: Vec<Arc<dyn Provider + Send + Sync>>,
    config: ChainConfig,
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is made here; an unreachable node shows up on first use.
    pub fn new(config: ChainConfig) -> BlockchainResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::NotAvailable(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        providers.push(
            Arc::new(ProviderBuilder::new().connect_http(primary_url)) as Arc<dyn Provider + Send + Sync>,
        );

        for url_str in &config.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(
                    Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>,
                );
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        tracing::info!(
            rpc_url = %config.rpc_url,
            failovers = providers.len() - 1,
            "Blockchain client initialized"
        );

        Ok(Self {
            providers,
            config,
            timeout_duration,
        })
    }

    fn exhausted(&self, last_error: Option<String>) -> BlockchainError {
        match last_error {
            Some(message) => BlockchainError::Rpc(message),
            None => BlockchainError::Timeout(self.config.rpc_timeout_secs),
        }
    }
}

impl ChainClient for BlockchainClient {
    async fn estimate_gas(&self, from: Address, to: Address, data: Bytes) -> BlockchainResult<u64> {
        let request = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(data);

        let mut last_error = None;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.estimate_gas(request.clone());
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(gas)) => return Ok(gas),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "Gas estimation failed");
                    last_error = Some(e.to_string());
                }
                Err(_) => tracing::warn!(provider_idx = i, "Gas estimation timed out"),
            }
        }
        Err(self.exhausted(last_error))
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        let mut last_error = None;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_gas_price();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(price)) => return Ok(price),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error");
                    last_error = Some(e.to_string());
                }
                Err(_) => tracing::warn!(provider_idx = i, "RPC timeout"),
            }
        }
        Err(self.exhausted(last_error))
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("providers", &self.providers.len())
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
