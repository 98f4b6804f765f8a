//! Wallet provider backed by a JSON-RPC endpoint that holds the accounts.
//!
//! Works against dev nodes with unlocked accounts and signer proxies. Nodes have
//! no permission prompt, so `eth_requestAccounts` falls back to `eth_accounts`
//! when the endpoint does not implement it.

use alloy::primitives::Address;
use alloy::rpc::client::RpcClient;
use alloy::transports::TransportError;
use arc_swap::ArcSwapOption;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::WalletConfig;
use crate::wallet::provider::{
    ProviderError, WalletProvider, ETH_ACCOUNTS, ETH_REQUEST_ACCOUNTS,
};

/// JSON-RPC "method not found".
const METHOD_NOT_FOUND: i64 = -32601;

pub struct RpcWallet {
    client: RpcClient,
    rpc_url: String,
    selected: ArcSwapOption<Address>,
    timeout_secs: u64,
}

impl RpcWallet {
    /// Create a wallet from configuration. No request is made here.
    pub fn new(config: &WalletConfig) -> Result<Self, ProviderError> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ProviderError::Transport(format!("Invalid wallet RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let selected = match &config.selected_address {
            Some(raw) => Some(raw.trim().parse::<Address>().map_err(|e| ProviderError::Decode {
                method: "selected_address".to_string(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        tracing::info!(rpc_url = %config.rpc_url, selected = ?selected, "Wallet provider initialized");

        Ok(Self {
            client: RpcClient::new_http(url),
            rpc_url: config.rpc_url.clone(),
            selected: ArcSwapOption::from(selected.map(Arc::new)),
            timeout_secs: config.rpc_timeout_secs,
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let fut = self.client.request(method.to_string(), params);
        let result: Result<Result<Value, TransportError>, _> =
            timeout(Duration::from_secs(self.timeout_secs), fut).await;
        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(TransportError::ErrorResp(payload))) => Err(ProviderError::Rpc {
                code: payload.code,
                message: payload.message.to_string(),
            }),
            Ok(Err(e)) => Err(ProviderError::Transport(e.to_string())),
            Err(_) => Err(ProviderError::Timeout(self.timeout_secs)),
        }
    }

    /// Adopt the first authorized account when none is configured.
    ///
    /// A fresh process has not seen any accounts response yet, so transactions
    /// would have no sender without this.
    pub async fn init(&self) -> Result<(), ProviderError> {
        if self.selected_address().is_none() {
            self.request(ETH_ACCOUNTS, json!([])).await?;
        }
        Ok(())
    }

    /// Track the active account; an empty list means none is authorized.
    fn remember_first_account(&self, result: &Value) {
        let Some(list) = result.as_array() else {
            return;
        };
        let first = list
            .first()
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<Address>().ok());
        self.selected.store(first.map(Arc::new));
    }
}

impl WalletProvider for RpcWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        tracing::debug!(method, rpc_url = %self.rpc_url, "Wallet request");

        let result = match self.call(method, params.clone()).await {
            Err(ProviderError::Rpc { code, .. })
                if code == METHOD_NOT_FOUND && method == ETH_REQUEST_ACCOUNTS =>
            {
                tracing::debug!("Endpoint has no {}, using {}", ETH_REQUEST_ACCOUNTS, ETH_ACCOUNTS);
                self.call(ETH_ACCOUNTS, params).await?
            }
            other => other?,
        };

        if method == ETH_REQUEST_ACCOUNTS || method == ETH_ACCOUNTS {
            self.remember_first_account(&result);
        }
        Ok(result)
    }

    fn selected_address(&self) -> Option<Address> {
        self.selected.load_full().map(|a| *a)
    }
}

impl std::fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcWallet")
            .field("rpc_url", &self.rpc_url)
            .field("selected", &self.selected_address())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
