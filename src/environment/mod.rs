//! Environment snapshot.
//!
//! Reads the tracked variables (`NODE_ENV`, `DATABASE_URL`) once at startup,
//! substituting a fixed default for any that are unset, and detects CI
//! providers.

pub mod detection;
pub mod snapshot;

pub use detection::{detect_ci_with, is_ci};
pub use snapshot::{EnvEntry, EnvSnapshot, ValueSource, TRACKED_VARS};
