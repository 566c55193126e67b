//! Steps of a job run.
//!
//! A [`Step`] is one named unit of sequential work. Steps communicate only
//! through the [`StepContext`]: a producing step records an [`Artifact`],
//! and a later step that `needs` it reads the artifact back.
//!
//! - [`ReportEnvStep`] - print the environment snapshot
//! - [`WriteArtifactStep`] - the `test` job, writes the artifact
//! - [`ReadArtifactStep`] - the `build` job, reads the artifact
//!
//! # Example
//!
//! ```
//! use jobsim::steps::{ReadArtifactStep, Step, StepContext, WriteArtifactStep};
//! use jobsim::ui::MockUI;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut ctx = StepContext::new(dir.path());
//! let mut ui = MockUI::new();
//!
//! WriteArtifactStep::new("test", "output.txt", "hola").run(&mut ctx, &mut ui).unwrap();
//! ReadArtifactStep::new("build", "test", "output.txt").run(&mut ctx, &mut ui).unwrap();
//!
//! assert_eq!(ctx.artifact("build").unwrap().content, "hola");
//! ```

pub mod read_artifact;
pub mod report_env;
pub mod result;
pub mod write_artifact;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::ui::UserInterface;

pub use read_artifact::ReadArtifactStep;
pub use report_env::ReportEnvStep;
pub use result::{format_duration, StepResult, StepStatus};
pub use write_artifact::WriteArtifactStep;

/// Path of the artifact shared by the `test` and `build` jobs.
pub const ARTIFACT_PATH: &str = "output.txt";

/// Content the `test` job writes.
pub const ARTIFACT_CONTENT: &str = "datos de prueba";

/// One unit of sequential work.
pub trait Step {
    /// Unique step name.
    fn name(&self) -> &str;

    /// Name of the step that must complete before this one runs.
    fn needs(&self) -> Option<&str> {
        None
    }

    /// Whether this step is a numbered job with its own banner.
    fn is_job(&self) -> bool {
        true
    }

    /// Perform the step.
    fn run(&self, ctx: &mut StepContext, ui: &mut dyn UserInterface) -> Result<()>;
}

/// A file produced by one step and consumed by a later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Step that produced (or last read) the artifact.
    pub producer: String,
    /// Resolved file path.
    pub path: PathBuf,
    /// File content as text.
    pub content: String,
}

/// State handed from step to step.
#[derive(Debug, Clone)]
pub struct StepContext {
    workdir: PathBuf,
    artifacts: HashMap<String, Artifact>,
}

impl StepContext {
    /// Create a context rooted at `workdir`. An empty path means the
    /// process working directory.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            artifacts: HashMap::new(),
        }
    }

    /// Working directory relative paths are resolved against.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Resolve a path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workdir.join(path)
    }

    /// Record an artifact under its producing step.
    pub fn record(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.producer.clone(), artifact);
    }

    /// Artifact recorded by `step`, if any.
    pub fn artifact(&self, step: &str) -> Option<&Artifact> {
        self.artifacts.get(step)
    }
}
