use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a campaign update payload read from a JSON file
    Campaign {
        /// Path to the payload file
        file: PathBuf,
    },
    /// Validate a keyword update payload read from a JSON file
    Keyword {
        /// Path to the payload file
        file: PathBuf,
    },
    /// Report quota standing for a prospective operation
    Quota {
        /// Cost of the operation about to run
        #[arg(long)]
        cost: f64,
        /// Quota already consumed today
        #[arg(long, default_value_t = 0.0)]
        used: f64,
        /// Daily limit; falls back to the configured value
        #[arg(long)]
        limit: Option<f64>,
    },
    /// Convert between currency units and micros
    Convert {
        /// Currency amount to express in micros
        #[arg(long, conflicts_with = "micros", required_unless_present = "micros")]
        amount: Option<f64>,
        /// Micros amount to express in currency
        #[arg(long)]
        micros: Option<i64>,
    },
}
