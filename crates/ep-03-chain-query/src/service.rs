//! # Chain Query Service
//!
//! Implements `ChainQueryApi` on top of any `ChainRpc`. Network errors pass
//! through unchanged.

use async_trait::async_trait;
use ep_01_key_material::Address;
use tracing::{debug, instrument};

use crate::domain::entities::{AccountKind, Balance, ChainInfo};
use crate::domain::errors::NetworkError;
use crate::ports::inbound::ChainQueryApi;
use crate::ports::outbound::ChainRpc;

/// Chain query service over an RPC backend `R`.
#[derive(Debug)]
pub struct ChainQueryService<R: ChainRpc> {
    rpc: R,
}

impl<R: ChainRpc> ChainQueryService<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    /// The underlying RPC backend.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }
}

#[async_trait]
impl<R: ChainRpc> ChainQueryApi for ChainQueryService<R> {
    #[instrument(skip(self))]
    async fn balance(&self, address: &Address) -> Result<Balance, NetworkError> {
        let wei = self.rpc.get_balance(address).await?;
        debug!(%wei, "Fetched balance");
        Ok(Balance::new(*address, wei))
    }

    async fn latest_block(&self) -> Result<u64, NetworkError> {
        self.rpc.get_block_number().await
    }

    async fn chain(&self) -> Result<ChainInfo, NetworkError> {
        let chain_id = self.rpc.get_chain_id().await?;
        Ok(ChainInfo::from_chain_id(chain_id))
    }

    #[instrument(skip(self))]
    async fn classify(&self, address: &Address) -> Result<AccountKind, NetworkError> {
        let code = self.rpc.get_code(address).await?;
        let kind = AccountKind::from_code(&code);
        debug!(?kind, "Classified account");
        Ok(kind)
    }
}
