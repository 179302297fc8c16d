//! # Key Material (EP-01)
//!
//! Generates secp256k1 key pairs and derives their Ethereum-style addresses.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure key and address logic, no I/O
//! - **Ports Layer** (`ports/`): The public API and the entropy dependency
//! - **Adapters Layer** (`adapters/`): Entropy sources
//! - **Service Layer** (`service.rs`): Wires domain logic to an entropy source
//!
//! ## Security Notes
//!
//! - Private scalars are drawn by rejection sampling, uniform in [1, n-1]
//! - Private scalars are zeroized on drop and redacted from `Debug`
//! - Nothing in this crate logs or persists a private scalar

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::entropy::{InsecureTestEntropy, OsEntropy};
pub use domain::address::{derive_address, parse_address, to_checksum_hex};
pub use domain::encoding::{
    decode_private_key, decode_public_key, encode_private_key, encode_public_key,
};
pub use domain::entities::{Address, Hash, KeyPair, PrivateKey, PublicKey};
pub use domain::errors::{EncodingError, EntropyError, KeyError};
pub use domain::hashing::keccak256;
pub use domain::keygen::generate_key_pair;
pub use ports::inbound::KeyMaterialApi;
pub use ports::outbound::EntropySource;
pub use service::KeyMaterialService;
