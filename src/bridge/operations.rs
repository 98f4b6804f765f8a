//! The bridge operations and their shared submission pipeline.

use alloy::primitives::{Address, U256};

use crate::blockchain::contract::batch_arguments;
use crate::blockchain::{ChainClient, Contract, ContractCall, TransactionParameters};
use crate::bridge::types::{Action, BridgeError, TxOutcome, WalletState, WalletStatus};
use crate::wallet::provider::{self as requests, WalletProvider};

/// Presentation and batch settings for a bridge.
#[derive(Debug, Clone)]
pub struct BridgeSettings {
    /// Prefix the transaction hash is appended to.
    pub explorer_tx_url: String,
    /// Recipient of every token minted by `mint_batch`.
    pub batch_recipient: Address,
    /// Largest `amount` `mint_batch` accepts.
    pub max_batch_size: u64,
}

/// Connects one wallet provider to one token contract.
///
/// The provider is optional: a bridge built without one answers every wallet
/// query with [`WalletStatus::NoProvider`].
pub struct WalletBridge<P, C> {
    provider: Option<P>,
    chain: C,
    contract: Contract,
    settings: BridgeSettings,
}

impl<P: WalletProvider, C: ChainClient> WalletBridge<P, C> {
    pub fn new(provider: Option<P>, chain: C, contract: Contract, settings: BridgeSettings) -> Self {
        Self {
            provider,
            chain,
            contract,
            settings,
        }
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Request account access, possibly prompting the user.
    pub async fn connect_wallet(&self) -> WalletState {
        let Some(provider) = &self.provider else {
            return WalletState::disconnected(WalletStatus::NoProvider);
        };

        match requests::request_accounts(provider).await {
            Ok(accounts) => wallet_state(accounts.first().copied()),
            Err(e) => {
                tracing::warn!(error = %e, rejected = e.is_user_rejection(), "Account request failed");
                WalletState::disconnected(WalletStatus::RequestRejected(e.to_string()))
            }
        }
    }

    /// Read already-authorized accounts without prompting.
    pub async fn current_wallet(&self) -> WalletState {
        let Some(provider) = &self.provider else {
            return WalletState::disconnected(WalletStatus::NoProvider);
        };

        match requests::accounts(provider).await {
            Ok(accounts) => wallet_state(accounts.first().copied()),
            Err(e) => {
                tracing::warn!(error = %e, "Reading accounts failed");
                WalletState::disconnected(WalletStatus::RequestRejected(e.to_string()))
            }
        }
    }

    /// Mint `token_id` to the selected account.
    pub async fn mint(&self, token_id: &str) -> TxOutcome {
        if is_blank(token_id) {
            return TxOutcome::Failed(BridgeError::IncompleteFields(Action::Mint));
        }
        let token_id = match parse_token_id(token_id) {
            Ok(id) => id,
            Err(e) => return TxOutcome::Failed(e),
        };

        self.submit(|from| ContractCall::Mint { to: from, token_id }).await
    }

    /// Mint ids `offset .. offset + amount` to the configured batch recipient.
    pub async fn mint_batch(&self, amount: u64, offset: u64) -> TxOutcome {
        if amount == 0 {
            return TxOutcome::Failed(BridgeError::EmptyBatch);
        }
        if amount > self.settings.max_batch_size {
            return TxOutcome::Failed(BridgeError::BatchTooLarge {
                requested: amount,
                max: self.settings.max_batch_size,
            });
        }
        let (recipients, token_ids) = batch_arguments(self.settings.batch_recipient, amount, offset);

        self.submit(move |_| ContractCall::MintBatch {
            recipients,
            token_ids,
        })
        .await
    }

    /// Move `token_id` from the selected account to `to` with `safeTransferFrom`.
    pub async fn safe_transfer(&self, token_id: &str, to: &str) -> TxOutcome {
        let (token_id, to) = match transfer_arguments(token_id, to) {
            Ok(args) => args,
            Err(e) => return TxOutcome::Failed(e),
        };

        self.submit(|from| ContractCall::SafeTransferFrom { from, to, token_id }).await
    }

    /// Move `token_id` from the selected account to `to` with `transferFrom`.
    pub async fn transfer(&self, token_id: &str, to: &str) -> TxOutcome {
        let (token_id, to) = match transfer_arguments(token_id, to) {
            Ok(args) => args,
            Err(e) => return TxOutcome::Failed(e),
        };

        self.submit(|from| ContractCall::TransferFrom { from, to, token_id }).await
    }

    pub async fn redeem(&self, token_id: &str) -> TxOutcome {
        if is_blank(token_id) {
            return TxOutcome::Failed(BridgeError::IncompleteFields(Action::Redeem));
        }
        let token_id = match parse_token_id(token_id) {
            Ok(id) => id,
            Err(e) => return TxOutcome::Failed(e),
        };

        self.submit(|_| ContractCall::Redeem { token_id }).await
    }

    async fn submit(&self, build: impl FnOnce(Address) -> ContractCall) -> TxOutcome {
        match self.try_submit(build).await {
            Ok(tx_hash) => {
                let explorer_url = format!("{}{}", self.settings.explorer_tx_url, tx_hash);
                TxOutcome::Submitted {
                    tx_hash,
                    explorer_url,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, contract = %self.contract.address(), "Transaction not submitted");
                TxOutcome::Failed(e)
            }
        }
    }

    async fn try_submit(
        &self,
        build: impl FnOnce(Address) -> ContractCall,
    ) -> Result<String, BridgeError> {
        let provider = self.provider.as_ref().ok_or(BridgeError::NoProvider)?;
        let from = provider
            .selected_address()
            .ok_or(BridgeError::NoSelectedAddress)?;

        let contract = self.contract.address();
        let call = build(from);
        let method = call.method();
        let data = call.encode();

        let gas = self
            .chain
            .estimate_gas(from, contract, data.clone())
            .await
            .map_err(BridgeError::GasEstimation)?;
        tracing::debug!(method, gas, "Gas estimated");

        let gas_price = self.chain.gas_price().await.map_err(BridgeError::GasPrice)?;
        tracing::debug!(method, gas_price, "Gas price fetched");

        let params = TransactionParameters::new(contract, from, gas, gas_price, data);
        let tx_hash = requests::send_transaction(provider, &params)
            .await
            .map_err(BridgeError::Submission)?;

        tracing::info!(method, %from, tx_hash = %tx_hash, "Transaction submitted");
        Ok(tx_hash)
    }
}

fn wallet_state(first: Option<Address>) -> WalletState {
    match first {
        Some(address) => WalletState::connected(address),
        None => WalletState::disconnected(WalletStatus::NotConnected),
    }
}

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_token_id(input: &str) -> Result<U256, BridgeError> {
    let trimmed = input.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some("") => return Err(BridgeError::InvalidTokenId(input.to_string())),
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(trimmed, 10),
    };
    parsed.map_err(|_| BridgeError::InvalidTokenId(input.to_string()))
}

fn parse_address(input: &str) -> Result<Address, BridgeError> {
    input
        .trim()
        .parse()
        .map_err(|_| BridgeError::InvalidAddress(input.to_string()))
}

fn transfer_arguments(token_id: &str, to: &str) -> Result<(U256, Address), BridgeError> {
    if is_blank(token_id) || is_blank(to) {
        return Err(BridgeError::IncompleteFields(Action::Transfer));
    }
    Ok((parse_token_id(token_id)?, parse_address(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_id() {
        assert_eq!(parse_token_id(" 42 ").unwrap(), U256::from(42));
        assert_eq!(parse_token_id("0x2a").unwrap(), U256::from(42));
        assert!(matches!(parse_token_id("4x2"), Err(BridgeError::InvalidTokenId(_))));
        assert!(matches!(parse_token_id("-1"), Err(BridgeError::InvalidTokenId(_))));
        assert!(matches!(parse_token_id("0x"), Err(BridgeError::InvalidTokenId(_))));
    }

    #[test]
    fn test_transfer_arguments_checks_blank_first() {
        assert!(matches!(
            transfer_arguments("", "0xabc"),
            Err(BridgeError::IncompleteFields(Action::Transfer))
        ));
        assert!(matches!(
            transfer_arguments("1", "0xabc"),
            Err(BridgeError::InvalidAddress(_))
        ));
        let (id, to) =
            transfer_arguments("1", "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        assert_eq!(id, U256::from(1));
        assert_eq!(to.to_string().to_lowercase(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[test]
    fn test_wallet_state_from_accounts() {
        assert_eq!(wallet_state(None).status, WalletStatus::NotConnected);
        assert_eq!(wallet_state(Some(Address::ZERO)).address, Some(Address::ZERO));
    }
}
