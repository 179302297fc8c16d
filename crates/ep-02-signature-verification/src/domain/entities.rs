//! # Domain Entities
//!
//! The recoverable signature wire form and the tagged recovery id.

use ep_01_key_material::EncodingError;

use super::errors::{RecoveryFailure, SignatureError};

/// `r(32) || s(32) || v(1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset of the legacy `v` encoding (27/28, and 29/30 for overflowed x).
const LEGACY_V_OFFSET: u8 = 27;

// =============================================================================
// Recovery id
// =============================================================================

/// Parity of the y coordinate of the signing nonce point R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YParity {
    Even,
    Odd,
}

/// Which x coordinate the signing nonce point R has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XCoordinate {
    /// x(R) = r
    R,
    /// x(R) = r + n. Only possible when r + n < p, so vanishingly rare.
    ROverflowed,
}

/// Selects one of the up to four candidate points R during recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecoveryId {
    pub parity: YParity,
    pub x: XCoordinate,
}

impl RecoveryId {
    pub const fn new(parity: YParity, x: XCoordinate) -> Self {
        Self { parity, x }
    }

    /// Decode a `v` byte. Accepts 0..=3 and the legacy 27..=30.
    pub fn from_v(v: u8) -> Result<Self, RecoveryFailure> {
        let id = match v {
            0..=3 => v,
            27..=30 => v - LEGACY_V_OFFSET,
            _ => return Err(RecoveryFailure::InvalidRecoveryId(v)),
        };

        let parity = match id & 1 {
            0 => YParity::Even,
            _ => YParity::Odd,
        };
        let x = match id & 2 {
            0 => XCoordinate::R,
            _ => XCoordinate::ROverflowed,
        };
        Ok(Self { parity, x })
    }

    /// The id as 0..=3.
    pub fn to_byte(self) -> u8 {
        let parity = match self.parity {
            YParity::Even => 0,
            YParity::Odd => 1,
        };
        let x = match self.x {
            XCoordinate::R => 0,
            XCoordinate::ROverflowed => 2,
        };
        parity | x
    }

    /// Same x, opposite y. Negating s selects this id for the same signer.
    pub fn flipped_parity(self) -> Self {
        let parity = match self.parity {
            YParity::Even => YParity::Odd,
            YParity::Odd => YParity::Even,
        };
        Self { parity, ..self }
    }
}

// =============================================================================
// Recoverable signature
// =============================================================================

/// A 65-byte recoverable ECDSA signature.
///
/// Parsing checks only the layout and the recovery id; scalar ranges are
/// checked during recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecoverableSignature {
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    pub fn new(r: [u8; 32], s: [u8; 32], recovery_id: RecoveryId) -> Self {
        Self { r, s, recovery_id }
    }

    /// Parse `r || s || v`.
    ///
    /// A 64-byte input lacks its recovery id and is rejected like any other
    /// wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecoveryFailure> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(RecoveryFailure::InvalidLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        let recovery_id = RecoveryId::from_v(bytes[64])?;

        Ok(Self { r, s, recovery_id })
    }

    /// Parse from hex, `0x` prefix optional.
    pub fn from_hex(input: &str) -> Result<Self, SignatureError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes =
            hex::decode(digits).map_err(|e| EncodingError::InvalidHex(e.to_string()))?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// Serialize as `r || s || v` with the legacy `v = 27 + id`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.recovery_id.to_byte() + LEGACY_V_OFFSET;
        bytes
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Verification policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Reject s > n/2 (EIP-2). Off by default: any s in [1, n-1] recovers.
    pub require_low_s: bool,
}

impl VerifierConfig {
    /// Policy that rejects high-s signatures.
    pub fn strict() -> Self {
        Self {
            require_low_s: true,
        }
    }
}
