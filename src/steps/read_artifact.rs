//! Artifact-consuming step (the `build` job).

use std::path::PathBuf;

use tracing::debug;

use crate::error::{JobsimError, Result};
use crate::ui::UserInterface;

use super::{Artifact, Step, StepContext};

/// Reads back the artifact written by the step it needs.
#[derive(Debug, Clone)]
pub struct ReadArtifactStep {
    name: String,
    needs: String,
    path: PathBuf,
}

impl ReadArtifactStep {
    /// Create a step that reads the artifact of `needs`. `path` is used
    /// when that step recorded no artifact.
    pub fn new(name: &str, needs: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            needs: needs.to_string(),
            path: path.into(),
        }
    }
}

impl Step for ReadArtifactStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn needs(&self) -> Option<&str> {
        Some(&self.needs)
    }

    fn run(&self, ctx: &mut StepContext, ui: &mut dyn UserInterface) -> Result<()> {
        let path = ctx
            .artifact(&self.needs)
            .map(|a| a.path.clone())
            .unwrap_or_else(|| ctx.resolve(&self.path));
        debug!(path = %path.display(), "reading artifact");

        let content = std::fs::read_to_string(&path).map_err(|source| JobsimError::ReadFailure {
            path: path.clone(),
            source,
        })?;

        ui.message(&format!("Contenido de {}: {}", self.path.display(), content));
        ui.detail(&format!("read {} bytes from {}", content.len(), path.display()));

        ctx.record(Artifact {
            producer: self.name.clone(),
            path,
            content,
        });

        ui.success(&format!("Job {} completado con éxito", self.name.to_uppercase()));
        Ok(())
    }
}
