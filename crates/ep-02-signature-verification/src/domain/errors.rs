//! # Signature Errors
//!
//! A malformed claimed key and an unrecoverable signature are distinct,
//! explicit failures. Neither is ever reported as a plain mismatch.

use ep_01_key_material::EncodingError;
use thiserror::Error;

/// Why no public key could be recovered from a signature.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecoveryFailure {
    /// Not `r(32) || s(32) || v(1)`
    #[error("Invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// v is not in {0..=3} or {27..=30}
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// r or s is zero or not below the curve order
    #[error("Signature component {0} out of range [1, n-1]")]
    ScalarOutOfRange(&'static str),

    /// No curve point has the candidate x coordinate
    #[error("No curve point for the candidate x coordinate")]
    NoCurvePoint,

    /// The recovered point is the identity
    #[error("Recovered point is at infinity")]
    PointAtInfinity,

    /// The recovered key does not satisfy the verification equation
    #[error("Recovered key fails the verification equation")]
    EquationMismatch,

    /// s > n/2 while low-s signatures are required (EIP-2)
    #[error("Malleable signature (high S value)")]
    HighS,
}

/// Errors surfaced by signature verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The claimed key (or the signature hex) could not be decoded
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(#[from] EncodingError),

    /// No signer could be recovered from the signature
    #[error("Recovery failed: {0}")]
    RecoveryFailure(#[from] RecoveryFailure),
}
