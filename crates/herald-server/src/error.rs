//! Error types for herald-server

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for herald-server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in herald-server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from herald-core (route table construction)
    #[error("Core error: {0}")]
    Core(#[from] herald_core::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error without a known path (e.g. binding a socket)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error at {}: {source}", .path.display())]
    IoPath {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates an I/O error tagged with the file it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
