//! jobsim - Simulate dependent CI jobs.
//!
//! jobsim reports a couple of environment variables, then runs two jobs in
//! strict order: `test` writes an artifact file and `build` reads it back.
//! The first failure stops the run and the process exits with code 1.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Environment snapshot and CI detection
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Sequential, fail-fast workflow execution
//! - [`steps`] - The steps a workflow is made of
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use jobsim::environment::EnvSnapshot;
//! use jobsim::runner::{Workflow, WorkflowRunner};
//! use jobsim::ui::MockUI;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let workflow = Workflow::ci(EnvSnapshot::capture_with(|_| None));
//! let result = WorkflowRunner::new(dir.path())
//!     .run(&workflow, &mut MockUI::new())
//!     .unwrap();
//! assert_eq!(result.exit_code(), 0);
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod runner;
pub mod steps;
pub mod ui;

pub use error::{JobsimError, Result};
