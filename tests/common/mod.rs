//! Shared mock collaborators for bridge integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address, Bytes};
use nft_wallet_bridge::blockchain::{BlockchainError, BlockchainResult, ChainClient, Contract};
use nft_wallet_bridge::bridge::{BridgeSettings, WalletBridge};
use nft_wallet_bridge::wallet::provider::{
    ProviderError, ETH_ACCOUNTS, ETH_REQUEST_ACCOUNTS, ETH_SEND_TRANSACTION,
};
use nft_wallet_bridge::wallet::WalletProvider;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const CONTRACT: Address = address!("0xd73762e63f50E184358D02d3620BCa8c5c929e12");
pub const BATCH_RECIPIENT: Address = address!("0x9a3f9764B21adAF3C6fDf6f947e6D3340a3F8AC5");
pub const SELECTED: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const OTHER: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
pub const EXPLORER: &str = "https://ropsten.etherscan.io/tx/";
pub const MAX_BATCH: u64 = 100;

/// Wallet that answers from canned values and records every request.
pub struct MockWallet {
    pub accounts: Vec<Address>,
    pub selected: Option<Address>,
    pub accounts_error: Option<ProviderError>,
    pub send_result: Result<String, ProviderError>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockWallet {
    pub fn connected() -> Self {
        Self {
            accounts: vec![SELECTED, OTHER],
            selected: Some(SELECTED),
            accounts_error: None,
            send_result: Ok("0xDEADBEEF".to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|(m, _)| m).collect()
    }

    /// The single transaction object passed to `eth_sendTransaction`.
    pub fn sent_transaction(&self) -> Option<Value> {
        self.requests()
            .into_iter()
            .find(|(m, _)| m == ETH_SEND_TRANSACTION)
            .map(|(_, params)| params[0].clone())
    }
}

impl WalletProvider for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        match method {
            ETH_REQUEST_ACCOUNTS | ETH_ACCOUNTS => match &self.accounts_error {
                Some(e) => Err(e.clone()),
                None => Ok(json!(self.accounts)),
            },
            ETH_SEND_TRANSACTION => self.send_result.clone().map(Value::String),
            other => Err(ProviderError::Rpc {
                code: -32601,
                message: format!("method {} not supported", other),
            }),
        }
    }

    fn selected_address(&self) -> Option<Address> {
        self.selected
    }
}

/// Chain with fixed gas answers that counts and records calls.
pub struct MockChain {
    pub gas: Result<u64, String>,
    pub gas_price: Result<u128, String>,
    calls: AtomicUsize,
    estimated: Mutex<Vec<(Address, Address, Bytes)>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            gas: Ok(21_000),
            gas_price: Ok(1_000_000_000),
            calls: AtomicUsize::new(0),
            estimated: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(from, to, data)` of every gas estimation.
    pub fn estimated(&self) -> Vec<(Address, Address, Bytes)> {
        self.estimated.lock().unwrap().clone()
    }
}

impl ChainClient for MockChain {
    async fn estimate_gas(&self, from: Address, to: Address, data: Bytes) -> BlockchainResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.estimated.lock().unwrap().push((from, to, data));
        self.gas.clone().map_err(BlockchainError::Rpc)
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gas_price.clone().map_err(BlockchainError::Rpc)
    }
}

pub fn settings() -> BridgeSettings {
    BridgeSettings {
        explorer_tx_url: EXPLORER.to_string(),
        batch_recipient: BATCH_RECIPIENT,
        max_batch_size: MAX_BATCH,
    }
}

pub fn bridge(wallet: Option<MockWallet>, chain: MockChain) -> WalletBridge<MockWallet, MockChain> {
    WalletBridge::new(wallet, chain, Contract::new(CONTRACT), settings())
}

pub fn connected_bridge() -> WalletBridge<MockWallet, MockChain> {
    bridge(Some(MockWallet::connected()), MockChain::new())
}

/// Start a JSON-RPC endpoint on an ephemeral port that answers each request
/// with `answer(method)` as its `result`. Returns the endpoint URL.
pub async fn start_json_rpc_backend<F>(answer: F) -> String
where
    F: Fn(&str) -> Value + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let answer = Arc::new(answer);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let answer = answer.clone();
                    tokio::spawn(async move {
                        let body = read_http_body(&mut socket).await;
                        let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                        let method = request["method"].as_str().unwrap_or_default();
                        let response = json!({
                            "jsonrpc": "2.0",
                            "id": request["id"],
                            "result": answer(method),
                        })
                        .to_string();

                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{}", addr)
}

async fn read_http_body(socket: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let body_start = header_end + 4;
            if buf.len() >= body_start + length {
                return buf[body_start..body_start + length].to_vec();
            }
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return Vec::new(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}
