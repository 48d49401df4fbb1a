//! Error types and exit codes for degrees-engine

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for degrees-engine operations
#[derive(Error, Debug)]
pub enum DegreesError {
    #[error("Data source error in {path}: {message}")]
    DataSource { path: String, message: String },

    #[error("Data source error in {path}: missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    #[error("Person not found.")]
    PersonNotFound { name: String },

    #[error("Unknown person id: {id}")]
    UnknownPerson { id: String },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    #[error("Search cancelled after {elapsed_ms} ms at depth {depth}")]
    SearchCancelled { elapsed_ms: u128, depth: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DegreesError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: Data source / IO / JSON error
    /// - 2: Usage error (reported by clap before we get here)
    /// - 3: Person not found
    /// - 4: Prompt failure or unknown person id
    /// - 5: Search cancelled by deadline
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::DataSource { .. } => ExitCode::from(1),
            Self::MissingColumn { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::Json(_) => ExitCode::from(1),
            Self::PersonNotFound { .. } => ExitCode::from(3),
            Self::UnknownPerson { .. } => ExitCode::from(4),
            Self::Prompt { .. } => ExitCode::from(4),
            Self::SearchCancelled { .. } => ExitCode::from(5),
        }
    }
}

/// Result type alias for degrees-engine operations
pub type Result<T> = std::result::Result<T, DegreesError>;
