//! # Key Material Service
//!
//! Application service implementing `KeyMaterialApi` on top of an injected
//! entropy source. Encoding and derivation are delegated to the domain layer.

use crate::adapters::entropy::OsEntropy;
use crate::domain::address;
use crate::domain::encoding;
use crate::domain::entities::{Address, KeyPair, PrivateKey, PublicKey};
use crate::domain::errors::{EncodingError, KeyError};
use crate::domain::keygen;
use crate::ports::inbound::KeyMaterialApi;
use crate::ports::outbound::EntropySource;

/// Key material service over an entropy source `E`.
#[derive(Debug, Clone, Default)]
pub struct KeyMaterialService<E: EntropySource = OsEntropy> {
    entropy: E,
}

impl<E: EntropySource> KeyMaterialService<E> {
    /// Create a service drawing randomness from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }
}

impl KeyMaterialService<OsEntropy> {
    /// Service backed by the operating system CSPRNG.
    pub fn with_os_entropy() -> Self {
        Self::new(OsEntropy::new())
    }
}

impl<E: EntropySource> KeyMaterialApi for KeyMaterialService<E> {
    fn generate_key_pair(&self) -> Result<(KeyPair, Address), KeyError> {
        keygen::generate_key_pair(&self.entropy)
    }

    fn derive_address(&self, public_key: &PublicKey) -> Address {
        address::derive_address(public_key)
    }

    fn encode_private_key(&self, private_key: &PrivateKey) -> String {
        encoding::encode_private_key(private_key)
    }

    fn decode_private_key(&self, encoded: &str) -> Result<PrivateKey, EncodingError> {
        encoding::decode_private_key(encoded)
    }

    fn encode_public_key(&self, public_key: &PublicKey) -> String {
        encoding::encode_public_key(public_key)
    }

    fn decode_public_key(&self, encoded: &str) -> Result<PublicKey, EncodingError> {
        encoding::decode_public_key(encoded)
    }
}
