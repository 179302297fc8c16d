//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the key material subsystem.

use crate::domain::entities::{Address, KeyPair, PrivateKey, PublicKey};
use crate::domain::errors::{EncodingError, KeyError};

/// Key material API.
///
/// Implementations must be thread-safe (`Send + Sync`); every operation is
/// independent of every other call.
pub trait KeyMaterialApi: Send + Sync {
    /// Generate a fresh key pair and its address.
    ///
    /// # Errors
    /// * `KeyError::Entropy` - the random source is unavailable or exhausted
    fn generate_key_pair(&self) -> Result<(KeyPair, Address), KeyError>;

    /// Derive the address owned by a public key.
    fn derive_address(&self, public_key: &PublicKey) -> Address;

    /// Encode a private scalar as `0x`-prefixed hex.
    fn encode_private_key(&self, private_key: &PrivateKey) -> String;

    /// Decode a private scalar from hex.
    fn decode_private_key(&self, encoded: &str) -> Result<PrivateKey, EncodingError>;

    /// Encode a public key as SEC1 uncompressed hex.
    fn encode_public_key(&self, public_key: &PublicKey) -> String;

    /// Decode a public key from hex, validating it is on the curve.
    fn decode_public_key(&self, encoded: &str) -> Result<PublicKey, EncodingError>;
}
