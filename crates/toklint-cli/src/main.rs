//! # toklint CLI Entry Point
//!
//! Parses arguments, initializes tracing, runs the repository check,
//! and owns the process exit policy: 0 on full success, 1 on the first
//! failure, with the diagnostic on stderr.

use std::path::PathBuf;

use clap::Parser;

/// Token-metadata repository validator.
///
/// Walks the repository tree, finds every ERC-20 `index.json` token
/// list, and validates each entry against a strict schema. Intended as
/// a pre-commit/CI gate for token-metadata data repositories.
#[derive(Parser, Debug)]
#[command(name = "toklint", version, about)]
struct Cli {
    /// Repository root to validate.
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    toklint_schema::run_check(&cli.root)?;
    Ok(())
}
