//! UTX node command-line tool — inspect and hash wire-format structures
//! produced by the UTX stack.
//!
//! # Command overview
//!
//! ```text
//! utx <COMMAND> [OPTIONS]
//!
//! Commands:
//!   inspect    Decode a hex-encoded block header and print its fields
//!   hash       Print the block id of a hex-encoded block header
//!   genesis    Print the built-in genesis header and its id
//!   help       Print help information
//!
//! Global options:
//!   --log-level <LEVEL>   Log filter when RUST_LOG is unset [default: info]
//!   -h, --help            Print help
//!   -V, --version         Print version
//! ```
//!
//! # Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | Success                                  |
//! | 1    | Error (bad hex, malformed header, etc.)  |
//!
//! Error details go to stderr so stdout can be piped cleanly.
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_genesis;
mod cmd_hash;
mod cmd_inspect;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "utx", version, about = "UTX node wire-format CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex-encoded block header and print its fields.
    Inspect(InspectArgs),
    /// Print the block id of a hex-encoded block header.
    Hash(HashArgs),
    /// Print the built-in genesis header and its id.
    Genesis,
}

/// Arguments for `utx inspect`.
#[derive(clap::Args)]
struct InspectArgs {
    /// Hex-encoded block header bytes.
    hex: String,

    /// Emit machine-readable JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

/// Arguments for `utx hash`.
#[derive(clap::Args)]
struct HashArgs {
    /// Hex-encoded block header bytes.
    hex: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = match &cli.command {
        Commands::Inspect(args) => cmd_inspect::run(args),
        Commands::Hash(args) => cmd_hash::run(args),
        Commands::Genesis => cmd_genesis::run(),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
