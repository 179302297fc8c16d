//! Runtime configuration.
//!
//! Built-in defaults, then environment variables, then command line flags.
//! Invalid environment values are logged and ignored.

use std::time::Duration;

use ep_02_signature_verification::VerifierConfig;
use tracing::{info, warn};

use crate::cli::Args;

/// Public endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_RPC_URL: &str = "EP_RPC_URL";
pub const ENV_RPC_TIMEOUT_SECS: &str = "EP_RPC_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub rpc_url: String,
    pub timeout: Duration,
    pub verifier: VerifierConfig,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verifier: VerifierConfig::default(),
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Resolve against the process environment.
    pub fn load(args: &Args) -> Self {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(args: &Args, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Override RPC endpoint from environment
        if let Some(url) = env(ENV_RPC_URL) {
            let url = url.trim();
            if url.is_empty() {
                warn!("{ENV_RPC_URL} is empty, ignoring");
            } else {
                config.rpc_url = url.to_string();
                info!(rpc_url = %config.rpc_url, "Loaded RPC URL from environment");
            }
        }

        if let Some(secs) = env(ENV_RPC_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("{ENV_RPC_TIMEOUT_SECS} must be a positive integer, got {secs:?}"),
            }
        }

        // Flags win over environment
        if let Some(url) = &args.rpc_url {
            config.rpc_url = url.clone();
        }
        if let Some(secs) = args.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        config.verifier.require_low_s = args.strict_low_s;
        if args.json {
            config.output = OutputFormat::Json;
        }

        config
    }
}
