//! # Network Errors

use std::time::Duration;

use thiserror::Error;

/// Errors from talking to a JSON-RPC endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection, TLS or HTTP-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// No complete answer within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The node answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The answer was not the JSON-RPC shape or value expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
