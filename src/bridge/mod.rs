//! Wallet bridge: the public operations.
//!
//! # Data Flow
//! ```text
//! caller input (strings, counts)
//!     → operations.rs (validate, parse, build ContractCall)
//!     → ChainClient (estimate gas, gas price)
//!     → WalletProvider (eth_sendTransaction)
//!     → types.rs (WalletState / TxOutcome, rendered by Display)
//! ```
//!
//! # Design Decisions
//! - Operations never return `Err`; every failure is folded into the result
//! - Results carry data; user-facing text comes from `Display`
//! - No retries; a failed step ends that call

pub mod operations;
pub mod types;

pub use operations::{BridgeSettings, WalletBridge};
pub use types::{Action, BridgeError, TxOutcome, WalletState, WalletStatus};
