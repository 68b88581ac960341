//! # CLI Execution Functions
//!
//! Kept out of `main.rs` so the entry point only parses and sets up logging.
//! Each subcommand resolves settings, builds the table once and prints a
//! single result, either as plain text or as one JSON object.

use anyhow::Result;
use primetable::config::{self, EnvLayer, Overrides, Settings};
use primetable::{factor, PrimeTable};
use serde_json::json;
use std::time::Instant;
use tracing::info;

use super::{Cli, Commands};

/// Resolve settings, build the table if the command needs one, and run it.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = settings_for(cli)?;
    let as_json = settings.json;

    match &cli.command {
        Commands::Factor { value } => run_factor(*value, as_json),
        Commands::List => run_list(&build_table(&settings), as_json),
        Commands::IsPrime { value } => run_is_prime(&build_table(&settings), *value, as_json),
        Commands::Nth { n } => run_nth(&build_table(&settings), *n, as_json),
        Commands::Next { prime } => run_next(&build_table(&settings), *prime, as_json),
        Commands::Count => run_count(&build_table(&settings), as_json),
    }
}

fn settings_for(cli: &Cli) -> Result<Settings> {
    let file = cli
        .config
        .as_deref()
        .map(config::parse_toml_file)
        .transpose()?;
    let overrides = Overrides {
        length: cli.length,
        bound: cli.bound,
        json: cli.json,
    };
    let env = EnvLayer::from_env()?;
    config::resolve(&overrides, &env, file.as_ref())
}

fn build_table(settings: &Settings) -> PrimeTable {
    let start = Instant::now();
    let table = settings.size.build();
    info!(
        len = table.len(),
        max_covered = table.max_covered(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "prime table ready"
    );
    table
}

// ── Subcommands ─────────────────────────────────────────────────

fn run_list(table: &PrimeTable, as_json: bool) -> Result<()> {
    if as_json {
        let primes: Vec<u64> = table.primes().collect();
        println!(
            "{}",
            json!({ "max_covered": table.max_covered(), "primes": primes })
        );
    } else {
        let mut out = String::new();
        for p in table {
            out.push_str(&p.to_string());
            out.push('\n');
        }
        print!("{}", out);
    }
    Ok(())
}

fn run_is_prime(table: &PrimeTable, value: u64, as_json: bool) -> Result<()> {
    let prime = table.is_prime(value)?;
    if as_json {
        println!("{}", json!({ "value": value, "prime": prime }));
    } else {
        println!("{}", prime);
    }
    Ok(())
}

fn run_nth(table: &PrimeTable, n: usize, as_json: bool) -> Result<()> {
    let prime = table.nth_prime(n).ok_or_else(|| {
        anyhow::anyhow!(
            "prime #{} not found: table up to {} holds {} primes",
            n,
            table.max_covered(),
            table.prime_count()
        )
    })?;
    if as_json {
        println!("{}", json!({ "n": n, "prime": prime }));
    } else {
        println!("{}", prime);
    }
    Ok(())
}

fn run_next(table: &PrimeTable, prime: u64, as_json: bool) -> Result<()> {
    let next = table.next_prime(prime)?.ok_or_else(|| {
        anyhow::anyhow!(
            "no prime after {} within table up to {}",
            prime,
            table.max_covered()
        )
    })?;
    if as_json {
        println!("{}", json!({ "after": prime, "prime": next }));
    } else {
        println!("{}", next);
    }
    Ok(())
}

fn run_count(table: &PrimeTable, as_json: bool) -> Result<()> {
    let count = table.prime_count();
    if as_json {
        println!(
            "{}",
            json!({ "max_covered": table.max_covered(), "count": count })
        );
    } else {
        println!("{}", count);
    }
    Ok(())
}

fn run_factor(value: u64, as_json: bool) -> Result<()> {
    let factors = factor::prime_factors(value);
    if as_json {
        println!("{}", json!({ "value": value, "factors": factors }));
    } else {
        let parts: Vec<String> = factors.iter().map(u64::to_string).collect();
        println!("{}", parts.join(" "));
    }
    Ok(())
}
