//! # Domain Layer
//!
//! Pure key material logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod address;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod keygen;
