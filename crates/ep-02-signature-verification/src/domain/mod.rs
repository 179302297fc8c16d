//! # Domain Layer
//!
//! Pure recovery and verification logic. No I/O, no shared state.

pub mod entities;
pub mod errors;
pub mod recovery;
pub mod verify;
