//! wallet-bridge
//!
//! Command-line front end for the wallet bridge.
//!
//! ```text
//!   wallet-bridge [--config bridge.toml] <command>
//!
//!   connect                      request account access
//!   current                      show the already-authorized account
//!   mint <ID>                    mint one token to the selected account
//!   mint-batch <AMOUNT> <OFFSET> mint a range of ids to the batch recipient
//!   safe-transfer <ID> <TO>      safeTransferFrom the selected account
//!   transfer <ID> <TO>           transferFrom the selected account
//!   redeem <ID>                  redeem a token
//! ```
//!
//! The status line goes to stdout; logs and startup errors go to stderr.
//! Exit code is 1 when the command did not succeed.

use std::process::ExitCode;

use clap::Parser;

use nft_wallet_bridge::cli::{build_bridge, load_bridge_config, run, Cli};
use nft_wallet_bridge::config::loader::{overridden_fields, CHAIN_RPC_URL_ENV_VAR};
use nft_wallet_bridge::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_bridge_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.observability.log_level);

    for field in overridden_fields() {
        tracing::debug!(field, env = CHAIN_RPC_URL_ENV_VAR, "Configuration overridden from environment");
    }
    tracing::info!(
        contract = %config.contract.address,
        chain_rpc = %config.chain.rpc_url,
        wallet_enabled = config.wallet.enabled,
        "Configuration loaded"
    );

    let bridge = match build_bridge(&config).await {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &bridge, &mut std::io::stdout()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
