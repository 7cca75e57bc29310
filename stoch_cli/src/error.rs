//! CLI error types for file I/O, CSV parsing and argument validation.

use std::io;

use stoch_core::StochError;
use thiserror::Error;

/// Every failure the CLI can surface. All of them are fatal.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened or read.
    #[error("I/O error with file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The CSV is malformed, misses a required column, or holds a bad value.
    #[error("CSV parse error{}: {message}", on_line(.line))]
    CsvParse { message: String, line: Option<u64> },

    /// A command-line value was rejected.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error(transparent)]
    Core(#[from] StochError),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        CliError::CsvParse {
            message: err.to_string(),
            line,
        }
    }
}

fn on_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" on line {l}")).unwrap_or_default()
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
