//! CLI tool for Authyntic.
//!
//! Computes content digests, commits files to a Merkle batch and verifies
//! batch commitments.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use authyntic::core::HashAlgorithm;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "authyntic")]
#[command(about = "Content digests and Merkle batch commitments", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute digests of files, a string, or stdin
    Digest {
        /// Algorithm to use (sha-256, sha-3, blake2b); repeatable
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Vec<HashAlgorithm>,

        /// Hash this string instead of reading files
        #[arg(long, conflicts_with = "files")]
        text: Option<String>,

        /// Files to hash (reads stdin when none are given)
        files: Vec<PathBuf>,
    },

    /// Commit files to a Merkle batch and emit inclusion proofs
    Commit {
        /// Leaf index to prove; repeatable (proves every leaf if omitted)
        #[arg(long, short)]
        index: Vec<usize>,

        /// Write the batch to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Files to commit, in leaf order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Verify every proof in a batch commitment file
    Verify {
        /// Path to a batch commitment JSON file
        batch: PathBuf,
    },

    /// Print the Merkle root of files, in leaf order
    Root {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn parse_algorithm(s: &str) -> Result<HashAlgorithm, authyntic::Error> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut settings = config::Settings::load(cli.config.as_deref())?;
    if cli.compact {
        settings.pretty = false;
    }

    match cli.command {
        Commands::Digest {
            algorithm,
            text,
            files,
        } => commands::digest(&settings, &algorithm, text.as_deref(), &files),
        Commands::Commit {
            index,
            output,
            files,
        } => commands::commit(&settings, &files, &index, output.as_deref()),
        Commands::Verify { batch } => commands::verify(&batch),
        Commands::Root { files } => commands::root(&files),
    }
}
