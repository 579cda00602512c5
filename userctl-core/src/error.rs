//! Structured error types for userctl-core.
//!
//! The binary (userctl-cli) wraps these in `anyhow` for reporting;
//! library callers get a matchable enum.

use std::io;
use thiserror::Error;

/// Main error type for userctl-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Query, connection or transaction failure reported by SQLite
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation failed (e.g. creating the database directory)
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for userctl-core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when SQLite rejected a write because of a `UNIQUE` constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database {
                source: sqlx::Error::Database(db_err),
            } => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("invalid database url");
        assert_eq!(err.to_string(), "configuration error: invalid database url");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn row_not_found_is_not_a_unique_violation() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(!err.is_unique_violation());
    }
}
