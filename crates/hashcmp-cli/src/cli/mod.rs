//! CLI for hashcmp.

mod commands;

use anyhow::Result;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use hashcmp_core::{config, HashMethod};
use std::path::PathBuf;

use commands::run_compare;

/// Compare the contents of files by calculating their hashes.
#[derive(Debug, Parser)]
#[command(name = "hashcmp")]
#[command(about = "hashcmp: check that files have the same content by comparing hashes", long_about = None)]
pub struct Cli {
    /// Files to calculate hashes for.
    #[arg(value_name = "FILENAME", required = true, num_args = 1..)]
    pub filenames: Vec<PathBuf>,

    /// Hash method name. Defaults to `default_hash_method` from config.toml, or sha256.
    #[arg(
        long = "hash_method",
        value_name = "METHOD",
        value_parser = PossibleValuesParser::new(HashMethod::ALL.map(HashMethod::name))
            .try_map(|s| s.parse::<HashMethod>())
    )]
    pub hash_method: Option<HashMethod>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let method = cli.hash_method.unwrap_or(cfg.default_hash_method);
        run_compare(&cli.filenames, method)
    }
}

#[cfg(test)]
mod tests;
