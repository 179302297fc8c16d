//! # Outbound Ports (Driven Ports / SPI)
//!
//! The raw node queries the service depends on. Implemented by
//! `JsonRpcClient`; replaced by in-memory fakes in tests.

use async_trait::async_trait;
use ep_01_key_material::Address;
use primitive_types::U256;

use crate::domain::errors::NetworkError;

/// Read-only access to an Ethereum node, always at the latest block.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// `eth_getBalance`: balance in wei.
    async fn get_balance(&self, address: &Address) -> Result<U256, NetworkError>;

    /// `eth_blockNumber`: height of the latest block.
    async fn get_block_number(&self) -> Result<u64, NetworkError>;

    /// `eth_chainId`: the EIP-155 chain id.
    async fn get_chain_id(&self) -> Result<u64, NetworkError>;

    /// `eth_getCode`: deployed bytecode, empty for accounts without code.
    async fn get_code(&self, address: &Address) -> Result<Vec<u8>, NetworkError>;
}
