//! # Main — CLI Entry Point
//!
//! Builds one prime table per invocation and runs a single query against it.
//!
//! ## Global Options
//!
//! - `--length`: number of sieve cells (covers `2n + 1`).
//! - `--bound`: smallest table covering this value.
//! - `--config`: TOML file with `[sieve]` and `[output]` sections.
//! - `--json`: print results as JSON.
//!
//! `PRIMETABLE_LENGTH` / `PRIMETABLE_BOUND` (environment or `.env`) size the
//! table when neither flag is given.
//!
//! Logging goes to stderr; `LOG_FORMAT=json` switches to JSON lines and
//! `RUST_LOG` sets the filter (default `warn`).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primetable", about = "Build a prime sieve and query it")]
struct Cli {
    /// Number of sieve cells; the table covers primes up to 2*length+1
    /// (overrides PRIMETABLE_LENGTH / PRIMETABLE_BOUND)
    #[arg(long, global = true, conflicts_with = "bound")]
    length: Option<usize>,

    /// Build the smallest table that covers this value
    /// (overrides PRIMETABLE_LENGTH / PRIMETABLE_BOUND)
    #[arg(long, global = true)]
    bound: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every prime the table covers
    List,
    /// Test whether a value is prime
    IsPrime {
        /// Value to test (must be within the table's coverage)
        value: u64,
    },
    /// Find the n-th prime (1-based, the 1st prime is 2)
    Nth {
        /// Position of the prime
        n: usize,
    },
    /// Find the prime following a given prime
    Next {
        /// A prime within the table's coverage
        prime: u64,
    },
    /// Count the primes the table covers
    Count,
    /// Factor a value by trial division (no table is built)
    Factor {
        /// Value to factor
        value: u64,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run(&cli)
}
