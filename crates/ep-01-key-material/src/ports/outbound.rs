//! # Outbound Ports (Driven Ports / SPI)
//!
//! The only external capability key generation needs is randomness.

use std::sync::Arc;

use crate::domain::errors::EntropyError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must be safe to draw from concurrently. Each call fills
/// the whole buffer or fails; a partially filled buffer is never returned
/// as success.
pub trait EntropySource: Send + Sync {
    /// Fill `buffer` entirely with random bytes.
    ///
    /// # Errors
    /// * `EntropyError::Unavailable` - the underlying source failed
    fn fill_random(&self, buffer: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for Arc<T> {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_random(buffer)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_random(buffer)
    }
}
