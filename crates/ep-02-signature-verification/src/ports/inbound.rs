//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the signature verification subsystem.

use ep_01_key_material::{Address, Hash, PublicKey};

use crate::domain::entities::RecoverableSignature;
use crate::domain::errors::{RecoveryFailure, SignatureError};

/// Signature verification API.
///
/// All operations are pure and may be called concurrently.
pub trait SignatureVerificationApi: Send + Sync {
    /// Verify a raw `r || s || v` signature over Keccak256(`message`) against
    /// a hex-encoded claimed public key.
    ///
    /// # Errors
    /// * `SignatureError::RecoveryFailure` - no signer can be recovered
    /// * `SignatureError::MalformedEncoding` - the claimed key is invalid
    fn verify_signature(
        &self,
        message: &[u8],
        signature: &[u8],
        claimed_public_key: &str,
    ) -> Result<bool, SignatureError>;

    /// Recover the signer's public key from a prehashed digest.
    fn recover_public_key(
        &self,
        hash: &Hash,
        signature: &RecoverableSignature,
    ) -> Result<PublicKey, RecoveryFailure>;

    /// Recover the signer's address for Keccak256(`message`).
    fn recover_address(
        &self,
        message: &[u8],
        signature: &RecoverableSignature,
    ) -> Result<Address, RecoveryFailure>;

    /// Check whether the signer of Keccak256(`message`) owns `address`.
    fn verify_signature_for_address(
        &self,
        message: &[u8],
        signature: &RecoverableSignature,
        address: &Address,
    ) -> Result<bool, RecoveryFailure>;
}
