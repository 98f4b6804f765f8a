//! Operation results and their user-facing rendering.

use alloy::primitives::Address;
use std::fmt;
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::wallet::ProviderError;

pub const WALLET_DOWNLOAD_URL: &str = "https://metamask.io/download.html";

/// Which kind of transaction a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Mint,
    Transfer,
    Redeem,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mint => "minting",
            Self::Transfer => "transferring",
            Self::Redeem => "redeeming",
        })
    }
}

/// Why a transaction was not submitted.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("required fields are empty before {0}")]
    IncompleteFields(Action),

    #[error("invalid token id '{0}'")]
    InvalidTokenId(String),

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("batch amount must be greater than zero")]
    EmptyBatch,

    #[error("batch of {requested} tokens exceeds the limit of {max}")]
    BatchTooLarge { requested: u64, max: u64 },

    #[error("no wallet provider is available")]
    NoProvider,

    #[error("no account is selected in the wallet")]
    NoSelectedAddress,

    #[error("gas estimation failed: {0}")]
    GasEstimation(#[source] BlockchainError),

    #[error("gas price unavailable: {0}")]
    GasPrice(#[source] BlockchainError),

    #[error("{0}")]
    Submission(#[source] ProviderError),
}

/// State of the wallet connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// No wallet provider exists at all.
    NoProvider,
    Connected,
    /// Provider present, but no account authorized yet.
    NotConnected,
    /// The provider refused or failed the account request.
    RequestRejected(String),
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProvider => write!(
                f,
                "🦊 You must install Metamask, a virtual Ethereum wallet, in your browser: {}",
                WALLET_DOWNLOAD_URL
            ),
            Self::Connected => f.write_str("👆🏽 Write a message in the text-field above."),
            Self::NotConnected => f.write_str("🦊 Connect to Metamask using the top right button."),
            Self::RequestRejected(message) => write!(f, "😥 {}", message),
        }
    }
}

/// Result of `connect_wallet` and `current_wallet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletState {
    /// `None` unless `status` is `Connected`.
    pub address: Option<Address>,
    pub status: WalletStatus,
}

impl WalletState {
    pub fn connected(address: Address) -> Self {
        Self { address: Some(address), status: WalletStatus::Connected }
    }

    pub fn disconnected(status: WalletStatus) -> Self {
        Self { address: None, status }
    }

    /// Address as display text, empty when not connected.
    pub fn address_text(&self) -> String {
        self.address.map(|a| a.to_string()).unwrap_or_default()
    }
}

/// Result of every transaction-sending operation.
#[derive(Debug)]
pub enum TxOutcome {
    Submitted { tx_hash: String, explorer_url: String },
    Failed(BridgeError),
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            Self::Submitted { tx_hash, .. } => Some(tx_hash),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&BridgeError> {
        match self {
            Self::Submitted { .. } => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// User-facing status line.
    pub fn status(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TxOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted { explorer_url, .. } => {
                write!(f, "✅ Check out your transaction on Etherscan: {}", explorer_url)
            }
            Self::Failed(BridgeError::IncompleteFields(action)) => write!(
                f,
                "❗Please make sure all fields are completed before {}.",
                action
            ),
            Self::Failed(e) => write!(f, "😥 Something went wrong: {}", e),
        }
    }
}
