//! # Key Generation
//!
//! Draws a private scalar uniformly from [1, n-1] by rejection sampling:
//! 32 random bytes are read big-endian and redrawn while zero or >= n.
//!
//! With a healthy source a redraw happens with probability ~2^-128, so a
//! long run of rejections means the source is broken. After
//! `MAX_SAMPLING_ATTEMPTS` consecutive rejections generation fails with
//! `EntropyError::Exhausted` instead of spinning.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::entities::{Address, KeyPair, PrivateKey};
use super::errors::{EntropyError, KeyError};
use crate::ports::outbound::EntropySource;

/// Consecutive out-of-range draws tolerated before giving up.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Generate a key pair and derive its address.
///
/// Consumes entropy and nothing else. The private scalar is never logged.
///
/// # Errors
/// * `KeyError::Entropy` - the source failed or produced only rejected draws
pub fn generate_key_pair<E>(entropy: &E) -> Result<(KeyPair, Address), KeyError>
where
    E: EntropySource + ?Sized,
{
    let private_key = sample_private_key(entropy)?;
    let key_pair = KeyPair::from_private_key(private_key);
    let address = key_pair.address();

    debug!(%address, "Generated key pair");
    Ok((key_pair, address))
}

/// Rejection-sample a scalar in [1, n-1].
fn sample_private_key<E>(entropy: &E) -> Result<PrivateKey, EntropyError>
where
    E: EntropySource + ?Sized,
{
    let mut candidate = Zeroizing::new([0u8; 32]);

    for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
        entropy.fill_random(&mut candidate[..])?;

        match PrivateKey::from_bytes(&candidate) {
            Ok(private_key) => return Ok(private_key),
            Err(_) => trace!(attempt, "Rejected scalar draw outside [1, n-1]"),
        }
    }

    Err(EntropyError::Exhausted {
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}
