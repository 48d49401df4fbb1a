//! Command handlers for the degrees CLI
//!
//! - `degrees` - prompt for two names, search, render the chain
//!
//! Handlers take a shared `CommandContext` for output format, verbosity and
//! the search deadline, and return the text to print on stdout.

pub mod degrees;

pub use degrees::{render_json, render_text, resolve_pair, run_degrees};

use std::time::Duration;

use crate::cli::{Cli, OutputFormat};

/// Shared context passed to command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output (adds search stats to JSON)
    pub verbose: bool,
    /// Search deadline, measured from the start of the search
    pub timeout: Option<Duration>,
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            verbose: cli.verbose,
            timeout: cli.timeout(),
        }
    }
}
