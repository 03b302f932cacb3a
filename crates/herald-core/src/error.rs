//! Error types for herald-core.
//!
//! Metadata resolution never fails. These errors only surface while the
//! route table is being assembled at startup.

use thiserror::Error;

/// Result type alias for herald-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The default record is missing an optional field it must provide.
    #[error("default metadata record is missing '{field}'")]
    IncompleteDefault {
        /// Name of the missing field
        field: &'static str,
    },

    /// A route key is not a normalized path.
    #[error("invalid route key '{key}': {reason}")]
    InvalidRouteKey {
        /// The offending key
        key: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The same route key was registered more than once.
    #[error("route '{0}' registered more than once")]
    DuplicateRoute(String),
}

impl Error {
    /// Creates an invalid-key error.
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidRouteKey {
            key: key.into(),
            reason,
        }
    }
}
