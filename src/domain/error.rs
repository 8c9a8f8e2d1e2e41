//! Error taxonomy for adapters and whole runs.
//!
//! Per-question extraction errors are recoverable: the pipeline logs them
//! and moves on. A generation error has nothing to fall back on, so it ends
//! the run as [`FlashcardError::Generation`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors an adapter may report instead of a result.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter cannot work with what it was given.
    #[error("invalid adapter input: {reason}")]
    InvalidInput { reason: String },

    /// The backing model produced something the adapter could not decode.
    #[error("malformed adapter output: {reason}")]
    MalformedOutput { reason: String },

    /// Anything else, e.g. resource exhaustion.
    #[error("adapter failure: {reason}")]
    Internal { reason: String },
}

impl AdapterError {
    pub fn internal(reason: impl Into<String>) -> Self {
        AdapterError::Internal { reason: reason.into() }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AdapterError::InvalidInput { reason: reason.into() }
    }

    pub fn malformed_output(reason: impl Into<String>) -> Self {
        AdapterError::MalformedOutput { reason: reason.into() }
    }
}

/// Invalid pipeline configuration, or a config file that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Run-level failures surfaced to the caller of the pipeline.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// The single generation call failed; no partial result exists.
    #[error("question generation failed: {0}")]
    Generation(#[source] AdapterError),

    /// A target of zero flashcards was requested.
    #[error("target flashcard count must be at least 1")]
    InvalidTarget,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
