//! Error types for freqrank.

use std::path::PathBuf;
use thiserror::Error;

use crate::capability::{BoxError, Capability};

/// The main error type for freqrank operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input was empty or contained only whitespace.
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// Input was shorter than the action requires.
    #[error("Input too short: expected at least {min} characters, got {actual}")]
    InputTooShort {
        /// Minimum number of characters required.
        min: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// Target language is not one of the supported translation targets.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The workbench was built without the collaborator an action needs.
    #[error("No {0} configured")]
    MissingCapability(Capability),

    /// An external collaborator failed.
    #[error("{capability} failed: {source}")]
    Collaborator {
        /// Which collaborator failed.
        capability: Capability,
        /// The collaborator's own error, unchanged.
        #[source]
        source: BoxError,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a collaborator failure.
    pub fn collaborator(capability: Capability, source: BoxError) -> Self {
        Error::Collaborator { capability, source }
    }

    /// Returns `true` for input-validation failures, which are surfaced to
    /// users as warnings rather than hard errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyInput(_) | Error::InputTooShort { .. })
    }
}

/// Result type alias for freqrank operations.
pub type Result<T> = std::result::Result<T, Error>;
