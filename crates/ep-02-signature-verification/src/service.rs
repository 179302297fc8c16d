//! # Signature Verification Service
//!
//! Binds the domain functions to a fixed `VerifierConfig`.

use ep_01_key_material::{Address, Hash, PublicKey};

use crate::domain::entities::{RecoverableSignature, VerifierConfig};
use crate::domain::errors::{RecoveryFailure, SignatureError};
use crate::domain::{recovery, verify};
use crate::ports::inbound::SignatureVerificationApi;

/// Stateless verifier carrying only its policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerificationService {
    config: VerifierConfig,
}

impl SignatureVerificationService {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }
}

impl SignatureVerificationApi for SignatureVerificationService {
    fn verify_signature(
        &self,
        message: &[u8],
        signature: &[u8],
        claimed_public_key: &str,
    ) -> Result<bool, SignatureError> {
        verify::verify_signature(message, signature, claimed_public_key, &self.config)
    }

    fn recover_public_key(
        &self,
        hash: &Hash,
        signature: &RecoverableSignature,
    ) -> Result<PublicKey, RecoveryFailure> {
        recovery::recover_public_key(hash, signature, &self.config)
    }

    fn recover_address(
        &self,
        message: &[u8],
        signature: &RecoverableSignature,
    ) -> Result<Address, RecoveryFailure> {
        verify::recover_address(message, signature, &self.config)
    }

    fn verify_signature_for_address(
        &self,
        message: &[u8],
        signature: &RecoverableSignature,
        address: &Address,
    ) -> Result<bool, RecoveryFailure> {
        verify::verify_signature_for_address(message, signature, address, &self.config)
    }
}
