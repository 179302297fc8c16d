//! # Chain Query (EP-03)
//!
//! Read-only queries against an Ethereum JSON-RPC endpoint: account balance,
//! latest block number, chain id and deployed code.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Balances, networks, unit formatting
//! - **Ports Layer** (`ports/`): `ChainQueryApi` (inbound), `ChainRpc` (outbound)
//! - **Adapters Layer** (`adapters/`): `JsonRpcClient` over HTTP
//! - **Service Layer** (`service.rs`): Turns raw RPC answers into domain values
//!
//! The only component in the workspace that performs I/O. Every request is
//! bounded by the client's timeout; errors are surfaced unchanged.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::json_rpc::JsonRpcClient;
pub use domain::entities::{AccountKind, Balance, ChainInfo};
pub use domain::errors::NetworkError;
pub use domain::network::Network;
pub use domain::units::{format_ether, format_units, group_thousands, ETHER_DECIMALS};
pub use ports::inbound::ChainQueryApi;
pub use ports::outbound::ChainRpc;
pub use primitive_types::U256;
pub use service::ChainQueryService;
