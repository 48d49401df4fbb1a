//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Find the shortest chain of co-starring movies between two people
#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(about = "Degrees of separation between two people in a movie cast dataset")]
#[command(version)]
pub struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv [default: large]
    #[arg(value_name = "DIRECTORY", env = "DEGREES_DATA_DIR")]
    pub directory: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging on stderr, search stats in JSON)
    #[arg(short, long)]
    pub verbose: bool,

    /// Give up the search after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - standard JSON output for machine parsing
    Json,
}

impl Cli {
    /// Search deadline requested on the command line
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
