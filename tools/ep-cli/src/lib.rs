//! # Ether-Probe CLI
//!
//! Glue between the command line and the library crates:
//! - `cli`: argument definitions
//! - `config`: defaults, environment and flag resolution
//! - `commands`: execution and text/JSON rendering

pub mod cli;
pub mod commands;
pub mod config;
