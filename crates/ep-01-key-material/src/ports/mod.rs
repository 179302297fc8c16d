//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use
//! - **Outbound (Driven)**: The entropy source this subsystem needs

pub mod inbound;
pub mod outbound;
