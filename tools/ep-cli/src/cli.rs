//! Command line arguments.

use clap::{ArgAction, Parser, Subcommand};

/// Ether-Probe: Ethereum account, key and signature utilities
#[derive(Parser, Debug)]
#[command(name = "ep", version)]
#[command(about = "Query an Ethereum node, generate keys and verify signatures")]
pub struct Args {
    /// JSON-RPC endpoint URL (overrides EP_RPC_URL)
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Request timeout in seconds (overrides EP_RPC_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Reject high-s (malleable) signatures
    #[arg(long, global = true)]
    pub strict_low_s: bool,

    /// Log more (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the ether balance of an address
    Balance {
        /// Account address (0x + 40 hex; mixed case must be EIP-55 valid)
        address: String,
    },

    /// Show the latest block number
    Block,

    /// Show the chain id and network name
    Chain,

    /// Check whether an address holds contract code
    Contract {
        /// Account address
        address: String,
    },

    /// Generate a new key pair (offline)
    Generate,

    /// Verify a signature against a claimed public key (offline)
    Verify {
        /// The signed message
        message: String,

        /// 65-byte signature r || s || v, hex
        signature: String,

        /// Claimed signer public key, hex (65-byte 04||x||y, 64-byte x||y or 33-byte compressed)
        public_key: String,

        /// Treat MESSAGE as hex-encoded bytes instead of UTF-8 text
        #[arg(long)]
        hex: bool,
    },

    /// Derive the address of a public key (offline)
    Address {
        /// Public key, hex
        public_key: String,
    },
}

impl Command {
    /// Whether the command talks to a node.
    pub fn needs_network(&self) -> bool {
        matches!(
            self,
            Self::Balance { .. } | Self::Block | Self::Chain | Self::Contract { .. }
        )
    }
}
