//! Command-line surface: argument parsing, bridge construction, output.

use std::io::Write;
use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use clap::{Parser, Subcommand};

use crate::blockchain::{BlockchainClient, ChainClient, Contract};
use crate::bridge::{BridgeSettings, TxOutcome, WalletBridge, WalletState};
use crate::config::loader::{default_config, load_config, ConfigError};
use crate::config::BridgeConfig;
use crate::wallet::{RpcWallet, WalletProvider};

#[derive(Debug, Parser)]
#[command(name = "wallet-bridge")]
#[command(about = "Mint, transfer and redeem tokens through a wallet provider", long_about = None)]
pub struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Request account access from the wallet
    Connect,
    /// Show the account the wallet already authorized
    Current,
    /// Mint one token to the selected account
    Mint { token_id: String },
    /// Mint AMOUNT consecutive ids starting at OFFSET to the batch recipient
    MintBatch { amount: u64, offset: u64 },
    /// Transfer a token with safeTransferFrom
    SafeTransfer { token_id: String, to: String },
    /// Transfer a token with transferFrom
    Transfer { token_id: String, to: String },
    /// Redeem a token
    Redeem { token_id: String },
}

/// Load the file at `path`, or defaults when no path is given.
pub fn load_bridge_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => default_config(),
    }
}

/// Build the bridge for a validated configuration.
///
/// When no account is configured the wallet is asked for its authorized
/// accounts once, so transaction commands have a sender. An unreachable wallet
/// is not fatal here; the command reports it.
pub async fn build_bridge(
    config: &BridgeConfig,
) -> Result<WalletBridge<RpcWallet, BlockchainClient>, Box<dyn std::error::Error>> {
    let contract = Contract::new(config.contract.address.trim().parse::<Address>()?);
    let settings = BridgeSettings {
        explorer_tx_url: config.explorer.tx_url.clone(),
        batch_recipient: config.contract.batch_recipient.trim().parse()?,
        max_batch_size: config.contract.max_batch_size,
    };

    let wallet = if config.wallet.enabled {
        let wallet = RpcWallet::new(&config.wallet)?;
        if let Err(e) = wallet.init().await {
            tracing::warn!(error = %e, "Could not read authorized accounts");
        }
        Some(wallet)
    } else {
        tracing::info!("Wallet provider disabled");
        None
    };
    let chain = BlockchainClient::new(config.chain.clone())?;

    Ok(WalletBridge::new(wallet, chain, contract, settings))
}

/// Run one command, writing the status to `out`. Returns whether it succeeded.
pub async fn run<P: WalletProvider, C: ChainClient>(
    command: Commands,
    bridge: &WalletBridge<P, C>,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    match command {
        Commands::Connect => print_wallet(out, &bridge.connect_wallet().await),
        Commands::Current => print_wallet(out, &bridge.current_wallet().await),
        Commands::Mint { token_id } => print_outcome(out, &bridge.mint(&token_id).await),
        Commands::MintBatch { amount, offset } => {
            print_outcome(out, &bridge.mint_batch(amount, offset).await)
        }
        Commands::SafeTransfer { token_id, to } => {
            print_outcome(out, &bridge.safe_transfer(&token_id, &to).await)
        }
        Commands::Transfer { token_id, to } => {
            print_outcome(out, &bridge.transfer(&token_id, &to).await)
        }
        Commands::Redeem { token_id } => print_outcome(out, &bridge.redeem(&token_id).await),
    }
}

fn print_wallet(out: &mut impl Write, state: &WalletState) -> std::io::Result<bool> {
    writeln!(out, "address: {}", state.address_text())?;
    writeln!(out, "{}", state.status)?;
    Ok(state.address.is_some())
}

fn print_outcome(out: &mut impl Write, outcome: &TxOutcome) -> std::io::Result<bool> {
    writeln!(out, "{}", outcome)?;
    Ok(outcome.is_success())
}
