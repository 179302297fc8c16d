//! # Networks
//!
//! Static chain id to network mapping. Ids outside the table are kept as
//! `Unknown` rather than dropped.

use std::fmt;

/// A known EVM network, or the raw id of an unknown one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Polygon,
    Mumbai,
    Unknown(u64),
}

impl Network {
    pub fn from_chain_id(chain_id: u64) -> Self {
        match chain_id {
            1 => Self::Mainnet,
            5 => Self::Goerli,
            11_155_111 => Self::Sepolia,
            137 => Self::Polygon,
            80_001 => Self::Mumbai,
            other => Self::Unknown(other),
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Goerli => 5,
            Self::Sepolia => 11_155_111,
            Self::Polygon => 137,
            Self::Mumbai => 80_001,
            Self::Unknown(id) => *id,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum Mainnet",
            Self::Goerli => "Goerli Testnet",
            Self::Sepolia => "Sepolia Testnet",
            Self::Polygon => "Polygon Mainnet",
            Self::Mumbai => "Polygon Mumbai",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<u64> for Network {
    fn from(chain_id: u64) -> Self {
        Self::from_chain_id(chain_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
