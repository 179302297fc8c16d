//! # Domain Entities
//!
//! Value types for key material. None of them is mutated after creation.

use std::fmt;
use std::str::FromStr;

use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, SecretKey};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::address::{derive_address, parse_address, to_checksum_hex};
use super::errors::EncodingError;

/// Keccak-256 digest.
pub type Hash = [u8; 32];

// =============================================================================
// Private key
// =============================================================================

/// A secp256k1 private scalar in [1, n-1].
///
/// The scalar is zeroized when dropped and never printed by `Debug`.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Build from 32 big-endian bytes.
    ///
    /// Rejects zero and anything not below the curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, EncodingError> {
        let secret = SecretKey::from_bytes(FieldBytes::from_slice(bytes))
            .map_err(|_| EncodingError::ScalarOutOfRange)?;
        Ok(Self { secret })
    }

    /// The scalar as 32 big-endian bytes, cleared when the buffer drops.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&self.secret.to_bytes());
        bytes
    }

    /// Public point = scalar · G.
    pub fn public_key(&self) -> PublicKey {
        let scalar = self.secret.to_nonzero_scalar();
        let point = (ProjectivePoint::GENERATOR * *scalar).to_affine();
        let encoded = point.to_encoded_point(false);

        // A non-zero scalar below n never lands on the identity, so the
        // uncompressed encoding is always 0x04 || x || y (65 bytes).
        let bytes = encoded.as_bytes();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..65]);
        PublicKey { x, y }
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.secret.ct_eq(&other.secret).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

// =============================================================================
// Public key
// =============================================================================

/// An affine secp256k1 point, stored as two 32-byte big-endian coordinates.
///
/// Only constructible from points verified to lie on the curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    x: [u8; 32],
    y: [u8; 32],
}

impl PublicKey {
    /// Build from affine coordinates, checking the curve equation.
    pub fn from_coordinates(x: [u8; 32], y: [u8; 32]) -> Result<Self, EncodingError> {
        let encoded = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(&x),
            FieldBytes::from_slice(&y),
            false,
        );
        Self::from_encoded_point(&encoded)
    }

    /// Build from a curve point. The identity is rejected.
    pub fn from_affine(point: &AffinePoint) -> Result<Self, EncodingError> {
        let encoded = point.to_encoded_point(false);
        match encoded.as_bytes() {
            [0x04, coordinates @ ..] if coordinates.len() == 64 => {
                let mut x = [0u8; 32];
                let mut y = [0u8; 32];
                x.copy_from_slice(&coordinates[..32]);
                y.copy_from_slice(&coordinates[32..]);
                Ok(Self { x, y })
            }
            _ => Err(EncodingError::PointAtInfinity),
        }
    }

    /// Decode any SEC1 encoding (compressed or uncompressed).
    pub(crate) fn from_encoded_point(encoded: &EncodedPoint) -> Result<Self, EncodingError> {
        if encoded.is_identity() {
            return Err(EncodingError::PointAtInfinity);
        }
        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(encoded).into();
        let point = point.ok_or(EncodingError::NotOnCurve)?;
        Self::from_affine(&point)
    }

    /// X coordinate (big-endian).
    pub fn x(&self) -> &[u8; 32] {
        &self.x
    }

    /// Y coordinate (big-endian).
    pub fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// `x || y` without the SEC1 tag; the Keccak input for address derivation.
    pub fn to_raw(&self) -> [u8; 64] {
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(&self.x);
        raw[32..].copy_from_slice(&self.y);
        raw
    }

    /// SEC1 uncompressed: `0x04 || x || y`.
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[0] = 0x04;
        bytes[1..].copy_from_slice(&self.to_raw());
        bytes
    }

    /// Address of this key.
    pub fn address(&self) -> Address {
        derive_address(self)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(0x{})", hex::encode(self.to_uncompressed()))
    }
}

// =============================================================================
// Address
// =============================================================================

/// Ethereum-style address: last 20 bytes of keccak256(x || y).
///
/// `Display` renders the EIP-55 checksummed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex, the form JSON-RPC peers expect.
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_checksum_hex(self))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_checksum_hex(self))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(de::Error::custom)
    }
}

// =============================================================================
// Key pair
// =============================================================================

/// A private scalar together with the public point it owns.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Derive the public half from a private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> Address {
        derive_address(&self.public_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .finish()
    }
}
