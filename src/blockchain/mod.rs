//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ContractCall (typed arguments)
//!     → contract.rs (ABI encoding against the fixed token contract)
//!     → client.rs (gas estimation, gas price over RPC with timeouts)
//!     → transaction.rs (parameters handed to the wallet for signing)
//! ```
//!
//! # Constraints
//! - The contract value is constructed once and passed explicitly
//! - All RPC calls have configurable timeouts
//! - No private keys here; signing is the wallet provider's job

pub mod client;
pub mod contract;
pub mod transaction;
pub mod types;

pub use client::{BlockchainClient, ChainClient};
pub use contract::{Contract, ContractCall};
pub use transaction::TransactionParameters;
pub use types::{BlockchainError, BlockchainResult};
