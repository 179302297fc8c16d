//! `ep`: Ether-Probe command line.
//!
//! Results are printed to stdout, logs to stderr. Exit status is 0 on
//! success and 1 on any error or on a signature mismatch.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ep_cli::cli::Args;
use ep_cli::commands::{self, Outcome};
use ep_cli::config::CliConfig;

/// Install the stderr subscriber. `-v` flags take precedence over `RUST_LOG`.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {e}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load configuration
    let config = CliConfig::load(&args);

    let mut stdout = io::stdout().lock();
    match commands::run(&args.command, &config, &mut stdout).await {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
