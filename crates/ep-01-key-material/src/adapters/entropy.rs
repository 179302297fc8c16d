//! # Entropy Adapters
//!
//! - [`OsEntropy`]: the operating system CSPRNG. Stateless, so concurrent
//!   draws need no lock. Use this for every real key.
//! - [`InsecureTestEntropy`]: a seeded ChaCha20 stream for reproducible test
//!   runs. The generator is stateful, so draws are serialized through a
//!   mutex; each draw is one locked fill and can never be torn.

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::warn;

use crate::domain::errors::EntropyError;
use crate::ports::outbound::EntropySource;

/// Operating system randomness (`getrandom`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buffer)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Deterministic, seeded randomness. **Insecure**: never use for real keys.
pub struct InsecureTestEntropy {
    rng: Mutex<ChaCha20Rng>,
}

impl InsecureTestEntropy {
    /// Seed the stream. Identical seeds replay identical draws.
    pub fn from_seed(seed: u64) -> Self {
        warn!(seed, "Insecure deterministic entropy source in use; keys are predictable");
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for InsecureTestEntropy {
    fn fill_random(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .lock()
            .try_fill_bytes(buffer)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

impl std::fmt::Debug for InsecureTestEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InsecureTestEntropy")
    }
}
