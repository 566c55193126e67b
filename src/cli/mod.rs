//! Command-line interface for jobsim.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The job run

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{RunCommand, RunReport};
