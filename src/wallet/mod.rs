//! Wallet provider subsystem.
//!
//! # Data Flow
//! ```text
//! bridge operation
//!     → provider.rs (EIP-1193 style request/response, typed helpers)
//!     → rpc.rs (JSON-RPC endpoint holding the accounts)
//! ```
//!
//! # Security Constraints
//! - The bridge never sees key material; the provider signs
//! - The selected account is whatever the provider last reported

pub mod provider;
pub mod rpc;

pub use provider::{ProviderError, WalletProvider};
pub use rpc::RpcWallet;
