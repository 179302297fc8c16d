//! # Key Material Errors

use thiserror::Error;

/// The secure random source could not produce a usable draw.
///
/// Fatal for the current call. The domain never retries; callers may.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying random source reported a failure
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),

    /// Every draw in the sampling budget was zero or not below the curve order
    #[error("Entropy source exhausted: {attempts} consecutive draws rejected")]
    Exhausted { attempts: usize },
}

/// Input could not be decoded into key material or an address.
///
/// Always a caller error. Nothing is ever partially accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input is not valid hexadecimal
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match the expected fixed length
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Public keys are 33 (compressed), 64 (raw) or 65 (uncompressed) bytes
    #[error("Unsupported public key length: {0} bytes")]
    UnsupportedPublicKeyLength(usize),

    /// SEC1 tag byte does not match the encoding length
    #[error("Unsupported public key prefix: 0x{0:02x}")]
    UnsupportedPrefix(u8),

    /// Private scalar is zero or not below the curve order
    #[error("Private key scalar out of range [1, n-1]")]
    ScalarOutOfRange,

    /// Coordinates do not describe a point on secp256k1
    #[error("Public key is not a point on secp256k1")]
    NotOnCurve,

    /// The identity element has no affine coordinates
    #[error("Public key is the point at infinity")]
    PointAtInfinity,

    /// Mixed-case address does not match its EIP-55 checksum
    #[error("Address checksum mismatch: {0}")]
    ChecksumMismatch(String),
}

/// Errors returned by key material operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error(transparent)]
    MalformedEncoding(#[from] EncodingError),
}
