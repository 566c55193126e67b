//! Error types for jobsim operations.
//!
//! This module defines [`JobsimError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Step failures (`WriteFailure`, `ReadFailure`) are reported by the runner
//!   and collapse into a failed workflow; they are never retried
//! - Use `anyhow::Error` (via `JobsimError::Other`) for unexpected errors
//! - Every error carries the path or step it concerns

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jobsim operations.
#[derive(Debug, Error)]
pub enum JobsimError {
    /// The artifact could not be created or overwritten.
    #[error("could not write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is missing or unreadable.
    #[error("could not read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The step list is malformed (duplicate names, forward dependencies).
    #[error("invalid workflow: {message}")]
    InvalidWorkflow { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for jobsim operations.
pub type Result<T> = std::result::Result<T, JobsimError>;
