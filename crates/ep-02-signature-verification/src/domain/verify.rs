//! # Signer Verification
//!
//! Recover-then-compare: the signer is recovered from the signature and its
//! coordinates are compared with the claimed key. A mismatch is `Ok(false)`;
//! anything that prevents the comparison is an error.

use ep_01_key_material::{decode_public_key, derive_address, keccak256, Address, PublicKey};
use subtle::ConstantTimeEq;
use tracing::debug;

use super::entities::{RecoverableSignature, VerifierConfig};
use super::errors::{RecoveryFailure, SignatureError};
use super::recovery::recover_public_key;

/// Verify that `signature` over Keccak256(`message`) was produced by the
/// holder of `claimed_public_key` (hex, any accepted public key form).
///
/// The signature is recovered before the claimed key is decoded, so an
/// unrecoverable signature is reported even when the key is also malformed.
///
/// # Errors
/// * `SignatureError::RecoveryFailure` - wrong length, bad recovery id,
///   out-of-range scalars, or no valid recovered key
/// * `SignatureError::MalformedEncoding` - the claimed key is not a valid point
pub fn verify_signature(
    message: &[u8],
    signature: &[u8],
    claimed_public_key: &str,
    config: &VerifierConfig,
) -> Result<bool, SignatureError> {
    let signature = RecoverableSignature::from_bytes(signature)?;
    let hash = keccak256(message);
    let recovered = recover_public_key(&hash, &signature, config)?;

    let claimed = decode_public_key(claimed_public_key)?;

    let matches = keys_match(&recovered, &claimed);
    debug!(matches, "Verified signature against claimed key");
    Ok(matches)
}

/// As [`verify_signature`], with parsed inputs.
pub fn verify_signature_with_key(
    message: &[u8],
    signature: &RecoverableSignature,
    claimed: &PublicKey,
    config: &VerifierConfig,
) -> Result<bool, RecoveryFailure> {
    let recovered = recover_public_key(&keccak256(message), signature, config)?;
    Ok(keys_match(&recovered, claimed))
}

/// Address of the signer of Keccak256(`message`).
pub fn recover_address(
    message: &[u8],
    signature: &RecoverableSignature,
    config: &VerifierConfig,
) -> Result<Address, RecoveryFailure> {
    let recovered = recover_public_key(&keccak256(message), signature, config)?;
    Ok(derive_address(&recovered))
}

/// Whether the signer of Keccak256(`message`) owns `address`.
pub fn verify_signature_for_address(
    message: &[u8],
    signature: &RecoverableSignature,
    address: &Address,
    config: &VerifierConfig,
) -> Result<bool, RecoveryFailure> {
    let recovered = recover_address(message, signature, config)?;
    Ok(bool::from(recovered.as_bytes()[..].ct_eq(&address.as_bytes()[..])))
}

/// Coordinate-wise equality of two points, in constant time.
fn keys_match(a: &PublicKey, b: &PublicKey) -> bool {
    let x = a.x()[..].ct_eq(&b.x()[..]);
    let y = a.y()[..].ct_eq(&b.y()[..]);
    (x & y).into()
}
