//! # Ether-Probe Test Suite
//!
//! Cross-crate tests that no single crate can host.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Flows across key material, verification and the CLI
//! └── benches/           # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ep-tests
//! cargo test -p ep-tests integration::key_generation
//! cargo bench -p ep-tests
//! ```

pub mod integration;
