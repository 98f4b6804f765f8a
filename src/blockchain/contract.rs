//! Static binding of the token contract and typed call construction.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Token contract surface used by the bridge.
    interface IRedeemableToken {
        function mint(address to, uint256 tokenId) external;
        function mintBatch(address[] to, uint256[] ids) external;
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
        function transferFrom(address from, address to, uint256 tokenId) external;
        function redeem(uint256 tokenId) external;
    }
}

/// Handle on the deployed token contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    address: Address,
}

impl Contract {
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

/// One invocation of a contract method with concrete arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    Mint {
        to: Address,
        token_id: U256,
    },
    /// `recipients` and `token_ids` are index-aligned and equally long.
    MintBatch {
        recipients: Vec<Address>,
        token_ids: Vec<U256>,
    },
    SafeTransferFrom {
        from: Address,
        to: Address,
        token_id: U256,
    },
    TransferFrom {
        from: Address,
        to: Address,
        token_id: U256,
    },
    Redeem {
        token_id: U256,
    },
}

impl ContractCall {
    /// Solidity method name, for logs.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::MintBatch { .. } => "mintBatch",
            Self::SafeTransferFrom { .. } => "safeTransferFrom",
            Self::TransferFrom { .. } => "transferFrom",
            Self::Redeem { .. } => "redeem",
        }
    }

    /// ABI-encode selector and arguments into transaction input.
    pub fn encode(&self) -> Bytes {
        let encoded = match self {
            Self::Mint { to, token_id } => IRedeemableToken::mintCall {
                to: *to,
                tokenId: *token_id,
            }
            .abi_encode(),
            Self::MintBatch {
                recipients,
                token_ids,
            } => IRedeemableToken::mintBatchCall {
                to: recipients.clone(),
                ids: token_ids.clone(),
            }
            .abi_encode(),
            Self::SafeTransferFrom { from, to, token_id } => {
                IRedeemableToken::safeTransferFromCall {
                    from: *from,
                    to: *to,
                    tokenId: *token_id,
                }
                .abi_encode()
            }
            Self::TransferFrom { from, to, token_id } => IRedeemableToken::transferFromCall {
                from: *from,
                to: *to,
                tokenId: *token_id,
            }
            .abi_encode(),
            Self::Redeem { token_id } => IRedeemableToken::redeemCall {
                tokenId: *token_id,
            }
            .abi_encode(),
        };
        Bytes::from(encoded)
    }
}

/// Build the aligned argument lists for minting `amount` ids starting at `offset`.
///
/// Allocates `amount` entries per list; callers bound `amount` first.
pub fn batch_arguments(recipient: Address, amount: u64, offset: u64) -> (Vec<Address>, Vec<U256>) {
    let start = U256::from(offset);
    let token_ids: Vec<U256> = (0..amount).map(|i| start + U256::from(i)).collect();
    let recipients = vec![recipient; token_ids.len()];
    (recipients, token_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const ALICE: Address = address!("0x9a3f9764B21adAF3C6fDf6f947e6D3340a3F8AC5");
    const BOB: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_selectors() {
        let call = ContractCall::Mint { to: ALICE, token_id: U256::from(7) };
        assert_eq!(&call.encode()[..4], &[0x40, 0xc1, 0x0f, 0x19]);

        let call = ContractCall::TransferFrom { from: ALICE, to: BOB, token_id: U256::from(7) };
        assert_eq!(&call.encode()[..4], &[0x23, 0xb8, 0x72, 0xdd]);

        let call = ContractCall::SafeTransferFrom { from: ALICE, to: BOB, token_id: U256::from(7) };
        assert_eq!(&call.encode()[..4], &[0x42, 0x84, 0x2e, 0x0e]);

        let call = ContractCall::Redeem { token_id: U256::from(7) };
        assert_eq!(&call.encode()[..4], &[0xdb, 0x00, 0x6a, 0x75]);
    }

    #[test]
    fn test_mint_encoding_layout() {
        let data = ContractCall::Mint { to: ALICE, token_id: U256::from(42) }.encode();
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[16..36], ALICE.as_slice());
        assert_eq!(data[67], 42);
    }

    #[test]
    fn test_batch_arguments() {
        let (recipients, ids) = batch_arguments(ALICE, 3, 10);
        assert_eq!(ids, vec![U256::from(10), U256::from(11), U256::from(12)]);
        assert_eq!(recipients, vec![ALICE; 3]);
    }

    #[test]
    fn test_batch_arguments_do_not_overflow() {
        let (_, ids) = batch_arguments(ALICE, 2, u64::MAX);
        assert_eq!(ids[1], U256::from(u64::MAX) + U256::from(1));
    }

    #[test]
    fn test_mint_batch_encoding() {
        let (recipients, token_ids) = batch_arguments(ALICE, 3, 10);
        let data = ContractCall::MintBatch { recipients, token_ids }.encode();
        assert_eq!(&data[..4], IRedeemableToken::mintBatchCall::SELECTOR.as_slice());
        // selector, two offsets, two length-prefixed arrays of three words
        assert_eq!(data.len(), 4 + 64 + 2 * (32 + 3 * 32));
    }

    #[test]
    fn test_contract_handle() {
        let contract = Contract::new(BOB);
        assert_eq!(contract.address(), BOB);
        assert_eq!(ContractCall::Redeem { token_id: U256::ZERO }.method(), "redeem");
    }
}
