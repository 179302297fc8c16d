//! JSON-RPC 2.0 client over HTTP POST.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ep_01_key_material::Address;
use primitive_types::U256;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::errors::NetworkError;
use crate::ports::outbound::ChainRpc;

/// Block tag used for every state query.
const LATEST: &str = "latest";

/// JSON-RPC request structure.
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u64,
}

/// JSON-RPC response structure.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse<R> {
    result: Option<R>,
    error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// RPC client for an Ethereum JSON-RPC endpoint.
#[derive(Debug)]
pub struct JsonRpcClient {
    http_client: Client,
    rpc_url: String,
    timeout: Duration,
    request_id: AtomicU64,
}

impl JsonRpcClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            rpc_url: rpc_url.into(),
            timeout,
            request_id: AtomicU64::new(1),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Get the next request ID.
    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Make a JSON-RPC call.
    #[instrument(skip(self, params), fields(url = %self.rpc_url))]
    async fn call<P: Serialize + Send, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, NetworkError> {
        let id = self.next_id();
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Transport(format!(
                "HTTP {status} from {}",
                self.rpc_url
            )));
        }

        let rpc_response: JsonRpcResponse<R> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                NetworkError::Timeout(self.timeout)
            } else {
                NetworkError::InvalidResponse(e.to_string())
            }
        })?;

        if let Some(error) = rpc_response.error {
            debug!(id, code = error.code, "RPC returned error");
            return Err(NetworkError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        debug!(id, "RPC call succeeded");
        rpc_response
            .result
            .ok_or_else(|| NetworkError::InvalidResponse("missing result".to_string()))
    }

    fn transport_error(&self, error: reqwest::Error) -> NetworkError {
        if error.is_timeout() {
            NetworkError::Timeout(self.timeout)
        } else if error.is_connect() {
            NetworkError::Transport(format!("cannot connect to {}: {error}", self.rpc_url))
        } else {
            NetworkError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl ChainRpc for JsonRpcClient {
    async fn get_balance(&self, address: &Address) -> Result<U256, NetworkError> {
        let result: String = self
            .call("eth_getBalance", (address.to_lower_hex(), LATEST))
            .await?;
        parse_hex_u256(&result)
    }

    async fn get_block_number(&self) -> Result<u64, NetworkError> {
        let result: String = self.call("eth_blockNumber", [(); 0]).await?;
        parse_hex_u64(&result)
    }

    async fn get_chain_id(&self) -> Result<u64, NetworkError> {
        let result: String = self.call("eth_chainId", [(); 0]).await?;
        parse_hex_u64(&result)
    }

    async fn get_code(&self, address: &Address) -> Result<Vec<u8>, NetworkError> {
        let result: String = self
            .call("eth_getCode", (address.to_lower_hex(), LATEST))
            .await?;
        parse_hex_bytes(&result)
    }
}

// =============================================================================
// HEX DECODING
// =============================================================================

fn quantity_digits(s: &str) -> Result<&str, NetworkError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| NetworkError::InvalidResponse(format!("quantity without 0x: {s:?}")))?;
    if digits.is_empty() {
        return Err(NetworkError::InvalidResponse("empty quantity".to_string()));
    }
    Ok(digits)
}

/// Parse a hex quantity such as `0x1b4` into a u64.
pub(crate) fn parse_hex_u64(s: &str) -> Result<u64, NetworkError> {
    let digits = quantity_digits(s)?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| NetworkError::InvalidResponse(format!("bad quantity {s:?}: {e}")))
}

/// Parse a hex quantity into a U256.
pub(crate) fn parse_hex_u256(s: &str) -> Result<U256, NetworkError> {
    let digits = quantity_digits(s)?;
    U256::from_str_radix(digits, 16)
        .map_err(|e| NetworkError::InvalidResponse(format!("bad quantity {s:?}: {e:?}")))
}

/// Parse hex data such as `0x6080`. `0x` alone is empty data.
pub(crate) fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, NetworkError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| NetworkError::InvalidResponse(format!("data without 0x: {s:?}")))?;
    hex::decode(digits).map_err(|e| NetworkError::InvalidResponse(format!("bad data: {e}")))
}
