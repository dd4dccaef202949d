//! Error types for assembly data generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for generator operations.
pub type AsmResult<T> = Result<T, AsmError>;

/// Errors that can occur while generating assembly data.
#[derive(Debug, Error)]
pub enum AsmError {
    /// The output sink could not be opened or written.
    #[error("failed to write {}: {source}", display_sink(.path))]
    WriteFailure {
        /// Destination path, `None` for streams such as stdout.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input file is missing or unreadable.
    #[error("failed to read input '{}': {source}", .path.display())]
    InputNotFound {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A converter option failed validation.
    #[error("invalid option '{name}': {message}")]
    InvalidOption {
        /// Option name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl AsmError {
    /// Creates a write failure for an unnamed stream.
    pub fn write_stream(source: io::Error) -> Self {
        Self::WriteFailure { path: None, source }
    }

    /// Creates a write failure for a file destination.
    pub fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: Some(path.into()),
            source,
        }
    }

    /// Creates an invalid option error.
    pub fn invalid_option(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            message: message.into(),
        }
    }
}

fn display_sink(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("'{}'", path.display()),
        None => "output stream".to_string(),
    }
}
