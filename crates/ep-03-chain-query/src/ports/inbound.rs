//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the chain query subsystem.

use async_trait::async_trait;
use ep_01_key_material::Address;

use crate::domain::entities::{AccountKind, Balance, ChainInfo};
use crate::domain::errors::NetworkError;

/// Chain query API.
#[async_trait]
pub trait ChainQueryApi: Send + Sync {
    /// Ether balance of `address`.
    async fn balance(&self, address: &Address) -> Result<Balance, NetworkError>;

    /// Latest block number.
    async fn latest_block(&self) -> Result<u64, NetworkError>;

    /// Chain id and the network it names.
    async fn chain(&self) -> Result<ChainInfo, NetworkError>;

    /// Whether `address` holds contract code.
    async fn classify(&self, address: &Address) -> Result<AccountKind, NetworkError>;
}
