//! `repo-sbom` — collect declared dependencies from a directory of git
//! repositories into a software bill of materials.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); wrong usage exits `1`.
//! 2. Check the root directory exists and make it absolute ([`cli::absolute_path`]).
//! 3. Load config ([`config::load_config`]).
//! 4. Scan every child repository's manifest ([`scanner::scan`], [`analyzer`]).
//! 5. Write `sbom.csv` and `sbom.json` ([`report`]).
//!
//! Exit `0` on success, `1` on wrong usage, a missing root, or when no
//! dependency was found. Manifest and I/O errors propagate out of `main`.

mod analyzer;
mod cli;
mod config;
mod detector;
mod error;
mod models;
mod report;
mod scanner;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::load_config;
use scanner::{scan, ScanOptions};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Wrong usage!");
            println!("Use the following syntax: repo-sbom <directory>");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    if !cli.path.exists() {
        println!("Given directory not found!");
        std::process::exit(1);
    }

    let path = cli::absolute_path(&cli.path)?;

    let config = load_config(&path, cli.config.as_deref())?;
    let options = ScanOptions {
        sorted: cli.sorted || config.scan.sorted,
        quiet: cli.quiet,
    };
    let output_dir = match &cli.output_dir {
        Some(dir) => cli::absolute_path(dir)?,
        None => config.output_dir(&path),
    };

    tracing::info!(root = %path.display(), sorted = options.sorted, "scanning");

    let Some(deps) = scan(&path, &options)? else {
        println!("No valid repos containing requirements.txt or package.json found!");
        std::process::exit(1);
    };

    if cli.verbose {
        report::terminal::render(&deps, &path);
    }

    report::write_all(&deps, &output_dir)?;

    Ok(())
}
