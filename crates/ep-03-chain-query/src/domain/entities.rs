//! # Domain Entities

use ep_01_key_material::Address;
use primitive_types::U256;

use super::network::Network;
use super::units::{format_ether, group_thousands};

/// Ether balance of an account at the latest block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub address: Address,
    pub wei: U256,
}

impl Balance {
    /// Fractional digits shown by default.
    pub const DISPLAY_PLACES: u32 = 6;

    pub fn new(address: Address, wei: U256) -> Self {
        Self { address, wei }
    }

    /// Balance in ether with `places` fractional digits, rounded half up.
    pub fn ether(&self, places: u32) -> String {
        format_ether(self.wei, places)
    }

    /// Balance in wei, grouped by thousands.
    pub fn wei_grouped(&self) -> String {
        group_thousands(self.wei)
    }
}

/// The chain an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub network: Network,
}

impl ChainInfo {
    pub fn from_chain_id(chain_id: u64) -> Self {
        Self {
            chain_id,
            network: Network::from_chain_id(chain_id),
        }
    }
}

/// What lives at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Code is deployed at the address
    Contract { code_size: usize },
    /// No code: an externally owned account (or an unused address)
    ExternallyOwned,
}

impl AccountKind {
    pub fn from_code(code: &[u8]) -> Self {
        if code.is_empty() {
            Self::ExternallyOwned
        } else {
            Self::Contract {
                code_size: code.len(),
            }
        }
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract { .. })
    }
}
