//! # Ports Layer
//!
//! Verification needs no external capability, so only the inbound API exists.

pub mod inbound;
