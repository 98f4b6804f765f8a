//! Request/response contract of an injected wallet provider.

use alloy::primitives::Address;
use serde_json::{json, Value};
use std::future::Future;
use thiserror::Error;

use crate::blockchain::TransactionParameters;

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_ACCOUNTS: &str = "eth_accounts";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";

/// EIP-1193 code for a request the user declined.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors reported by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with an error object.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// The provider could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("wallet request timed out after {0} seconds")]
    Timeout(u64),

    /// The provider answered with something of the wrong shape.
    #[error("unexpected response to {method}: {reason}")]
    Decode { method: String, reason: String },
}

impl ProviderError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

/// A wallet reachable through `request({ method, params })`.
pub trait WalletProvider: Send + Sync {
    /// Send one request and return the raw `result` value.
    fn request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Value, ProviderError>> + Send;

    /// The account the wallet currently acts as, if any.
    fn selected_address(&self) -> Option<Address>;
}

/// Ask the wallet for account access; may prompt the user.
pub async fn request_accounts<P: WalletProvider>(provider: &P) -> Result<Vec<Address>, ProviderError> {
    let result = provider.request(ETH_REQUEST_ACCOUNTS, json!([])).await?;
    decode(ETH_REQUEST_ACCOUNTS, result)
}

/// Accounts already authorized, without prompting.
pub async fn accounts<P: WalletProvider>(provider: &P) -> Result<Vec<Address>, ProviderError> {
    let result = provider.request(ETH_ACCOUNTS, json!([])).await?;
    decode(ETH_ACCOUNTS, result)
}

/// Submit a transaction for signing and broadcast, returning its hash.
pub async fn send_transaction<P: WalletProvider>(
    provider: &P,
    params: &TransactionParameters,
) -> Result<String, ProviderError> {
    let result = provider.request(ETH_SEND_TRANSACTION, json!([params])).await?;
    decode(ETH_SEND_TRANSACTION, result)
}

fn decode<T: serde::de::DeserializeOwned>(method: &str, value: Value) -> Result<T, ProviderError> {
    serde_json::from_value(value).map_err(|e| ProviderError::Decode {
        method: method.to_string(),
        reason: e.to_string(),
    })
}
