//! Transaction parameters handed to the wallet for signing and broadcast.

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Parameters of one `eth_sendTransaction` request.
///
/// `gas` and `gasPrice` serialize as `0x`-prefixed hex quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParameters {
    pub to: Address,
    pub from: Address,
    pub gas: U256,
    pub gas_price: U256,
    pub data: Bytes,
}

impl TransactionParameters {
    pub fn new(to: Address, from: Address, gas: u64, gas_price: u128, data: Bytes) -> Self {
        Self {
            to,
            from,
            gas: U256::from(gas),
            gas_price: U256::from(gas_price),
            data,
        }
    }
}
