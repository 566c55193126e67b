//! Artifact-producing step (the `test` job).

use std::path::PathBuf;

use tracing::debug;

use crate::error::{JobsimError, Result};
use crate::ui::UserInterface;

use super::{Artifact, Step, StepContext};

/// Writes a fixed text to a file, replacing any previous content.
#[derive(Debug, Clone)]
pub struct WriteArtifactStep {
    name: String,
    path: PathBuf,
    content: String,
}

impl WriteArtifactStep {
    /// Create a step that writes `content` to `path` (relative to the
    /// context's working directory).
    pub fn new(name: &str, path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
            content: content.to_string(),
        }
    }
}

impl Step for WriteArtifactStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &mut StepContext, ui: &mut dyn UserInterface) -> Result<()> {
        let path = ctx.resolve(&self.path);
        debug!(path = %path.display(), bytes = self.content.len(), "writing artifact");

        std::fs::write(&path, &self.content).map_err(|source| JobsimError::WriteFailure {
            path: path.clone(),
            source,
        })?;

        ctx.record(Artifact {
            producer: self.name.clone(),
            path,
            content: self.content.clone(),
        });

        ui.success(&format!(
            "Job {} completado: archivo {} creado",
            self.name.to_uppercase(),
            self.path.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_content_and_records_artifact() {
        let temp = TempDir::new().unwrap();
        let mut ctx = StepContext::new(temp.path());
        let mut ui = MockUI::new();

        WriteArtifactStep::new("test", "output.txt", "datos de prueba")
            .run(&mut ctx, &mut ui)
            .unwrap();

        let written = fs::read_to_string(temp.path().join("output.txt")).unwrap();
        assert_eq!(written, "datos de prueba");
        assert_eq!(ctx.artifact("test").unwrap().content, "datos de prueba");
        assert!(ui.has_success("Job TEST completado: archivo output.txt creado"));
    }

    #[test]
    fn overwrites_stale_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("output.txt"), "stale content from last run").unwrap();
        let mut ctx = StepContext::new(temp.path());

        WriteArtifactStep::new("test", "output.txt", "datos de prueba")
            .run(&mut ctx, &mut MockUI::new())
            .unwrap();

        let written = fs::read_to_string(temp.path().join("output.txt")).unwrap();
        assert_eq!(written, "datos de prueba");
    }

    #[test]
    fn missing_directory_is_write_failure() {
        let temp = TempDir::new().unwrap();
        let mut ctx = StepContext::new(temp.path().join("does-not-exist"));
        let mut ui = MockUI::new();

        let err = WriteArtifactStep::new("test", "output.txt", "x")
            .run(&mut ctx, &mut ui)
            .unwrap_err();

        assert!(matches!(err, JobsimError::WriteFailure { .. }));
        assert!(ctx.artifact("test").is_none());
        assert!(ui.successes().is_empty());
    }
}
