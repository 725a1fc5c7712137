//! Embedded filesystem packer CLI.
//!
//! Walks a directory tree and writes a generated Rust module that serves the
//! tree from memory through `embedfs_vfs`.
//!
//! # Examples
//!
//! ```bash
//! # Pack the assets directory into src/embedded.rs
//! embedfs --root assets src/embedded.rs
//!
//! # Scaffolding only, no payloads
//! embedfs --embed false src/embedded.rs
//!
//! # Generated module starts in local mode for development
//! embedfs --local src/embedded.rs
//! ```

// CLI flags are independent booleans, not an encoded state
#![allow(clippy::struct_excessive_bools)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use embedfs_codegen::{PackConfig, Packer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use report::OutputFormat;

/// Packs a directory tree into an embedded filesystem module.
///
/// The generated module carries every file as compressed, encoded text and
/// exposes it through `embedfs_vfs` at runtime. Re-run the same command to
/// refresh the module after the tree changes.
#[derive(Parser, Debug)]
#[command(name = "embedfs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the generated module to write
    target: PathBuf,

    /// Directory to embed (default: the target's parent directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Embed file contents; false emits scaffolding with an empty store
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    embed: bool,

    /// Generated module starts in local mode, reading from the source tree
    #[arg(long)]
    local: bool,

    /// Suppress progress logging and the summary report
    #[arg(short, long)]
    silent: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, conflicts_with = "silent")]
    verbose: bool,

    /// Summary format (pretty, json)
    #[arg(long = "format", default_value = "pretty")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.silent, cli.verbose);

    let format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    run(&cli, format)
}

/// Initializes logging infrastructure.
///
/// Log lines go to stderr so the summary report stays clean on stdout.
fn init_logging(silent: bool, verbose: bool) {
    let filter = if silent {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Packs the tree and writes the artifact.
///
/// The artifact is written only after a fully successful run, so an existing
/// generated module survives a failed refresh untouched.
fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let mut config = PackConfig::new(&cli.target)
        .with_embed(cli.embed)
        .with_local(cli.local);
    if let Some(root) = &cli.root {
        config = config.with_root(root);
    }

    let packer = Packer::new(config)?;
    let output = packer
        .run()
        .with_context(|| format!("packing into {} failed", cli.target.display()))?;

    fs::write(&cli.target, &output.artifact)
        .with_context(|| format!("writing {} failed", cli.target.display()))?;
    tracing::info!(target = %cli.target.display(), "module written");

    if !cli.silent {
        println!("{}", report::render_summary(&output.stats, format)?);
    }
    Ok(())
}
