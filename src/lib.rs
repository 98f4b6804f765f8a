//! Bridge between a wallet provider and a redeemable NFT contract.

pub mod blockchain;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod observability;
pub mod wallet;

pub use blockchain::{BlockchainClient, ChainClient, Contract};
pub use bridge::{BridgeSettings, TxOutcome, WalletBridge, WalletState, WalletStatus};
pub use config::BridgeConfig;
pub use wallet::{RpcWallet, WalletProvider};
