//! # Integration Tests
//!
//! - `key_generation`: uniqueness, concurrency and known vectors
//! - `signature_flows`: generate, sign with the reference signer, verify
//! - `cli_flows`: command execution without a reachable node

pub mod cli_flows;
pub mod key_generation;
pub mod signature_flows;
