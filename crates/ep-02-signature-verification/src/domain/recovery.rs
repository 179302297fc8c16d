//! # ECDSA Public-Key Recovery (secp256k1)
//!
//! Given a digest h and a signature (r, s, id):
//!
//! 1. r, s must be in [1, n-1]
//! 2. R is the curve point with x = r (or r + n) and the y parity named by id
//! 3. Q = r^-1 (s·R - z·G), where z = h mod n
//! 4. Q must not be the identity and must satisfy
//!    x(z·s^-1·G + r·s^-1·Q) mod n == r
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: done in constant time by `NonZeroScalar::from_repr`
//! - **Malleability (EIP-2)**: the high-s comparison is constant time; only
//!   enforced when `VerifierConfig::require_low_s` is set

use ep_01_key_material::{Hash, PublicKey};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::point::{AffineCoordinates, DecompressPoint};
use k256::{AffinePoint, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar, U256};
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;

use super::entities::{RecoverableSignature, RecoveryId, VerifierConfig, XCoordinate, YParity};
use super::errors::RecoveryFailure;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2). Signatures with s above this are the malleable twin.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// secp256k1 field prime p
/// p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
const SECP256K1_FIELD_PRIME: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the public key that produced `signature` over the digest `hash`.
///
/// # Errors
/// * `ScalarOutOfRange` - r or s is zero or >= n
/// * `HighS` - s > n/2 and `config.require_low_s` is set
/// * `NoCurvePoint` - the id selects an x with no curve point (or x >= p)
/// * `PointAtInfinity` - the recovered point is the identity
/// * `EquationMismatch` - the candidate fails the verification equation
pub fn recover_public_key(
    hash: &Hash,
    signature: &RecoverableSignature,
    config: &VerifierConfig,
) -> Result<PublicKey, RecoveryFailure> {
    let r = parse_scalar(signature.r(), "r")?;
    let s = parse_scalar(signature.s(), "s")?;

    if config.require_low_s && is_high_s(signature.s()) {
        return Err(RecoveryFailure::HighS);
    }

    let recovery_id = signature.recovery_id();
    let big_r = ProjectivePoint::from(candidate_point(signature.r(), recovery_id)?);
    let z = <Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(hash));

    let r_inv = invert(&r, "r")?;
    let q = (big_r * s - ProjectivePoint::GENERATOR * z) * r_inv;
    if q == ProjectivePoint::IDENTITY {
        return Err(RecoveryFailure::PointAtInfinity);
    }

    check_verification_equation(&q, &r, &s, &z)?;

    let public_key = PublicKey::from_affine(&q.to_affine())
        .map_err(|_| RecoveryFailure::PointAtInfinity)?;

    trace!(?recovery_id, "Recovered public key");
    Ok(public_key)
}

/// Decode a big-endian scalar in [1, n-1].
fn parse_scalar(bytes: &[u8; 32], component: &'static str) -> Result<Scalar, RecoveryFailure> {
    let scalar: Option<NonZeroScalar> =
        NonZeroScalar::from_repr(*FieldBytes::from_slice(bytes)).into();
    scalar
        .map(|scalar| *scalar)
        .ok_or(RecoveryFailure::ScalarOutOfRange(component))
}

fn invert(scalar: &Scalar, component: &'static str) -> Result<Scalar, RecoveryFailure> {
    Option::<Scalar>::from(scalar.invert()).ok_or(RecoveryFailure::ScalarOutOfRange(component))
}

/// The nonce point R selected by the recovery id.
fn candidate_point(r: &[u8; 32], recovery_id: RecoveryId) -> Result<AffinePoint, RecoveryFailure> {
    let x = match recovery_id.x {
        XCoordinate::R => *r,
        XCoordinate::ROverflowed => add_order(r).ok_or(RecoveryFailure::NoCurvePoint)?,
    };

    if !bool::from(ct_less_than(&x, &SECP256K1_FIELD_PRIME)) {
        return Err(RecoveryFailure::NoCurvePoint);
    }

    let y_is_odd = match recovery_id.parity {
        YParity::Even => Choice::from(0u8),
        YParity::Odd => Choice::from(1u8),
    };

    Option::<AffinePoint>::from(AffinePoint::decompress(FieldBytes::from_slice(&x), y_is_odd))
        .ok_or(RecoveryFailure::NoCurvePoint)
}

/// Check x(z·s^-1·G + r·s^-1·Q) mod n == r.
fn check_verification_equation(
    q: &ProjectivePoint,
    r: &Scalar,
    s: &Scalar,
    z: &Scalar,
) -> Result<(), RecoveryFailure> {
    let s_inv = invert(s, "s")?;
    let u1 = *z * s_inv;
    let u2 = *r * s_inv;

    let point = (ProjectivePoint::GENERATOR * u1 + *q * u2).to_affine();
    if point == AffinePoint::IDENTITY {
        return Err(RecoveryFailure::EquationMismatch);
    }

    let x = <Scalar as Reduce<U256>>::reduce_bytes(&point.x());
    if bool::from(x.ct_eq(r)) {
        Ok(())
    } else {
        Err(RecoveryFailure::EquationMismatch)
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// s > floor(n / 2).
///
/// ## Security: Constant-Time Implementation
///
/// Runs in fixed time regardless of the value of s.
pub(crate) fn is_high_s(s: &[u8; 32]) -> bool {
    ct_less_than(&SECP256K1_HALF_ORDER, s).into()
}

/// Constant-time big-endian `a < b`.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less
}

/// r + n, or `None` if the sum does not fit in 256 bits.
fn add_order(r: &[u8; 32]) -> Option<[u8; 32]> {
    let mut result = [0u8; 32];
    let mut carry: u16 = 0;

    for i in (0..32).rev() {
        let sum = r[i] as u16 + SECP256K1_ORDER[i] as u16 + carry;
        result[i] = sum as u8;
        carry = sum >> 8;
    }

    (carry == 0).then_some(result)
}

// =============================================================================
// TEST HELPERS
// =============================================================================
