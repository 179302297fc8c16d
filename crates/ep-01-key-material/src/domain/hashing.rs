//! Keccak-256, shared by address derivation and message digesting.

use sha3::{Digest, Keccak256};

use super::entities::Hash;

/// Keccak-256 (the pre-standard SHA-3 padding Ethereum uses).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
