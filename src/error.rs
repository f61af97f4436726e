//! Error types for the rolodex crate.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Callers branch on variants, never on message text; the
//! messages exist only for the single formatting step in the REPL.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored file is not valid snapshot JSON
    #[error("Corrupt address book file: {0}")]
    Serde(#[from] serde_json::Error),

    /// The stored snapshot was written by an unknown format version
    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors produced by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation at construction time
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup of a contact name that is not in the book
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Wrong number of positional arguments for a command
    #[error("'{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// An argument was present but unparseable (e.g. a non-numeric window)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unrecognized command word
    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
