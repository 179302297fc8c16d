//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod json_rpc;
