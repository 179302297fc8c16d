//! # Address Derivation
//!
//! Address = last 20 bytes of keccak256(x || y), where x || y is the
//! 64-byte uncompressed public point without the SEC1 tag byte.
//!
//! Addresses print in EIP-55 mixed-case checksum form.

use super::encoding::strip_hex_prefix;
use super::entities::{Address, PublicKey};
use super::errors::EncodingError;
use super::hashing::keccak256;

/// Derive the address owned by a public key.
///
/// Pure: the same point always yields the same 20 bytes.
pub fn derive_address(public_key: &PublicKey) -> Address {
    let hash = keccak256(&public_key.to_raw());

    // Take last 20 bytes as address
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address::from_bytes(address)
}

/// EIP-55 checksummed `0x`-prefixed hex.
///
/// A hex letter is uppercased when the matching nibble of
/// keccak256(lowercase hex) is >= 8.
pub fn to_checksum_hex(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = keccak256(lower.as_bytes());

    let mut checksummed = String::with_capacity(2 + 2 * Address::LEN);
    checksummed.push_str("0x");

    for (i, c) in lower.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let nibble = if i % 2 == 0 {
            hash_byte >> 4
        } else {
            hash_byte & 0x0f
        };

        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}

/// Parse a 20-byte hex address, `0x` prefix optional.
///
/// All-lowercase and all-uppercase inputs carry no checksum and are accepted
/// as-is. Mixed case must match EIP-55 exactly.
pub fn parse_address(input: &str) -> Result<Address, EncodingError> {
    let digits = strip_hex_prefix(input.trim());

    let decoded = hex::decode(digits).map_err(|e| EncodingError::InvalidHex(e.to_string()))?;
    let bytes: [u8; 20] =
        decoded
            .as_slice()
            .try_into()
            .map_err(|_| EncodingError::InvalidLength {
                expected: Address::LEN,
                actual: decoded.len(),
            })?;
    let address = Address::from_bytes(bytes);

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let expected = to_checksum_hex(&address);
        if &expected[2..] != digits {
            return Err(EncodingError::ChecksumMismatch(format!(
                "expected {}",
                expected
            )));
        }
    }

    Ok(address)
}
