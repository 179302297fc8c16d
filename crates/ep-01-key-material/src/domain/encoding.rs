//! # Key Encodings
//!
//! Hex encodings for private and public keys. Every decoder is the exact
//! inverse of its encoder: `decode(encode(x)) == x` for every valid `x`.
//!
//! | Item | Encoded form |
//! |------|--------------|
//! | Private key | `0x` + 64 hex chars (32-byte big-endian scalar) |
//! | Public key | `0x04` + 128 hex chars (SEC1 uncompressed) |
//!
//! Public key decoding additionally accepts the raw 64-byte `x || y` form and
//! the 33-byte SEC1 compressed form.

use k256::EncodedPoint;

use super::entities::{PrivateKey, PublicKey};
use super::errors::EncodingError;

const PRIVATE_KEY_LEN: usize = 32;
const RAW_PUBLIC_KEY_LEN: usize = 64;
const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;
const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Strip an optional `0x` / `0X` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn decode_hex(input: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(strip_hex_prefix(input.trim())).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

/// `0x`-prefixed lowercase hex of the 32-byte scalar.
pub fn encode_private_key(private_key: &PrivateKey) -> String {
    format!("0x{}", hex::encode(&*private_key.to_bytes()))
}

/// Parse a 32-byte hex scalar in [1, n-1].
pub fn decode_private_key(input: &str) -> Result<PrivateKey, EncodingError> {
    let decoded = zeroize::Zeroizing::new(decode_hex(input)?);
    let bytes: &[u8; PRIVATE_KEY_LEN] =
        decoded
            .as_slice()
            .try_into()
            .map_err(|_| EncodingError::InvalidLength {
                expected: PRIVATE_KEY_LEN,
                actual: decoded.len(),
            })?;
    PrivateKey::from_bytes(bytes)
}

/// `0x04 || x || y` as `0x`-prefixed lowercase hex.
pub fn encode_public_key(public_key: &PublicKey) -> String {
    format!("0x{}", hex::encode(public_key.to_uncompressed()))
}

/// Parse a public key and check that it lies on secp256k1.
pub fn decode_public_key(input: &str) -> Result<PublicKey, EncodingError> {
    let bytes = decode_hex(input)?;
    public_key_from_bytes(&bytes)
}

/// Interpret raw bytes as a public key (65 uncompressed, 64 raw, 33 compressed).
pub fn public_key_from_bytes(bytes: &[u8]) -> Result<PublicKey, EncodingError> {
    match bytes.len() {
        RAW_PUBLIC_KEY_LEN => {
            let mut x = [0u8; 32];
            let mut y = [0u8; 32];
            x.copy_from_slice(&bytes[..32]);
            y.copy_from_slice(&bytes[32..]);
            PublicKey::from_coordinates(x, y)
        }
        UNCOMPRESSED_PUBLIC_KEY_LEN => match bytes[0] {
            0x04 => from_sec1(bytes),
            prefix => Err(EncodingError::UnsupportedPrefix(prefix)),
        },
        COMPRESSED_PUBLIC_KEY_LEN => match bytes[0] {
            0x02 | 0x03 => from_sec1(bytes),
            prefix => Err(EncodingError::UnsupportedPrefix(prefix)),
        },
        other => Err(EncodingError::UnsupportedPublicKeyLength(other)),
    }
}

fn from_sec1(bytes: &[u8]) -> Result<PublicKey, EncodingError> {
    let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| EncodingError::NotOnCurve)?;
    PublicKey::from_encoded_point(&encoded)
}
