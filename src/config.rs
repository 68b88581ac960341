//! # Config — Table Size and Output Settings
//!
//! Settings are layered, highest priority first:
//!
//! 1. CLI flags (`--length`, `--bound`, `--json`)
//! 2. Environment (`PRIMETABLE_LENGTH`, `PRIMETABLE_BOUND`, also read from `.env`)
//! 3. TOML file passed with `--config`
//! 4. [`DEFAULT_LENGTH`]
//!
//! Command-line values arrive through clap as [`Overrides`]; the environment
//! is read separately into an [`EnvLayer`]. Each layer may name a length or a
//! bound but not both; the first layer naming either one decides the table
//! size. A TOML file looks like:
//!
//! ```toml
//! [sieve]
//! bound = 1000000
//!
//! [output]
//! json = true
//! ```

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::sieve::{len_for_bound, PrimeTable};

/// Length used when nothing else is configured; covers primes up to 101.
pub const DEFAULT_LENGTH: usize = 50;

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub sieve: SieveSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[sieve]` section. At most one of the two keys may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SieveSection {
    pub length: Option<usize>,
    pub bound: Option<u64>,
}

/// The `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub json: bool,
}

/// Environment variable holding a table length.
pub const LENGTH_VAR: &str = "PRIMETABLE_LENGTH";
/// Environment variable holding a table bound.
pub const BOUND_VAR: &str = "PRIMETABLE_BOUND";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub length: Option<usize>,
    pub bound: Option<u64>,
    pub json: bool,
}

/// Table size taken from `PRIMETABLE_LENGTH` / `PRIMETABLE_BOUND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvLayer {
    pub length: Option<usize>,
    pub bound: Option<u64>,
}

impl EnvLayer {
    /// Read the process environment. Unset or empty variables are ignored.
    pub fn from_env() -> Result<Self> {
        let length = std::env::var(LENGTH_VAR).ok();
        let bound = std::env::var(BOUND_VAR).ok();
        Self::from_values(length.as_deref(), bound.as_deref())
    }

    /// Parse raw variable values.
    pub fn from_values(length: Option<&str>, bound: Option<&str>) -> Result<Self> {
        Ok(EnvLayer {
            length: parse_var(LENGTH_VAR, length)?,
            bound: parse_var(BOUND_VAR, bound)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid {}={:?}: {}", name, value, e)),
    }
}

/// How large a table to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSize {
    /// Exact number of cells.
    Length(usize),
    /// Smallest table covering this value.
    Bound(u64),
}

impl TableSize {
    pub fn cell_count(self) -> usize {
        match self {
            TableSize::Length(len) => len,
            TableSize::Bound(bound) => len_for_bound(bound),
        }
    }

    pub fn build(self) -> PrimeTable {
        PrimeTable::with_len(self.cell_count())
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub size: TableSize,
    pub json: bool,
}

/// Parse a config file from a TOML string.
pub fn parse_toml(content: &str) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(content)?;
    validate(config.sieve.length, config.sieve.bound, "config file")?;
    Ok(config)
}

/// Parse a config file from disk.
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("cannot read config file {}: {}", path.display(), e)
    })?;
    parse_toml(&content)
}

fn validate(length: Option<usize>, bound: Option<u64>, origin: &str) -> Result<()> {
    if length.is_some() && bound.is_some() {
        anyhow::bail!("{}: length and bound are mutually exclusive", origin);
    }
    Ok(())
}

/// Merge command-line overrides, the environment and the optional file config.
pub fn resolve(
    overrides: &Overrides,
    env: &EnvLayer,
    file: Option<&FileConfig>,
) -> Result<Settings> {
    validate(overrides.length, overrides.bound, "command line")?;
    validate(
        env.length,
        env.bound,
        &format!("environment ({} / {})", LENGTH_VAR, BOUND_VAR),
    )?;

    let file_sieve = file.map(|f| &f.sieve);
    let layers = [
        (overrides.length, overrides.bound),
        (env.length, env.bound),
        file_sieve.map_or((None, None), |s| (s.length, s.bound)),
    ];
    let size = layers
        .into_iter()
        .find_map(|layer| match layer {
            (Some(len), _) => Some(TableSize::Length(len)),
            (None, Some(bound)) => Some(TableSize::Bound(bound)),
            (None, None) => None,
        })
        .unwrap_or(TableSize::Length(DEFAULT_LENGTH));
    let json = overrides.json || file.is_some_and(|f| f.output.json);

    Ok(Settings { size, json })
}
