//! # Domain Layer
//!
//! Chain query values and their presentation. No I/O.

pub mod entities;
pub mod errors;
pub mod network;
pub mod units;
