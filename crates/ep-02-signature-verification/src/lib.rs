//! # Signature Verification (EP-02)
//!
//! Recovers the signer of a Keccak-256 message digest from a 65-byte
//! recoverable ECDSA signature and compares it against a claimed key.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Signature parsing, recovery, comparison
//! - **Ports Layer** (`ports/`): The public API
//! - **Service Layer** (`service.rs`): Binds the API to a `VerifierConfig`
//!
//! ## Outcomes
//!
//! Verification has three distinct outcomes:
//! - `Ok(true)`: the recovered key equals the claimed key
//! - `Ok(false)`: both inputs are well formed but the keys differ
//! - `Err(_)`: a malformed claimed key, or a signature no key can be
//!   recovered from. Never folded into `false`.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: r and s must be in [1, n-1]
//! - **Candidate Validation**: the recovered key must satisfy the ECDSA
//!   verification equation for (r, s, h)
//! - **Malleability (EIP-2)**: optional; when enabled, s > n/2 is rejected
//! - **Constant-Time Comparison**: key comparison uses `subtle`

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    RecoverableSignature, RecoveryId, VerifierConfig, XCoordinate, YParity, SIGNATURE_LENGTH,
};
pub use domain::errors::{RecoveryFailure, SignatureError};
pub use domain::recovery::recover_public_key;
pub use domain::verify::{
    recover_address, verify_signature, verify_signature_for_address, verify_signature_with_key,
};
pub use ports::inbound::SignatureVerificationApi;
pub use service::SignatureVerificationService;
