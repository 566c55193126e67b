//! Integration tests for the runner and steps public API.

use jobsim::environment::EnvSnapshot;
use jobsim::runner::{RunProgress, Workflow, WorkflowRunner};
use jobsim::steps::{
    ReadArtifactStep, Step, StepContext, StepStatus, WriteArtifactStep, ARTIFACT_CONTENT,
};
use jobsim::ui::{MockUI, UserInterface};
use jobsim::{JobsimError, Result};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Records how many times it ran.
struct CountingStep {
    name: &'static str,
    needs: Option<&'static str>,
    runs: Arc<AtomicUsize>,
}

impl Step for CountingStep {
    fn name(&self) -> &str {
        self.name
    }

    fn needs(&self) -> Option<&str> {
        self.needs
    }

    fn run(&self, _ctx: &mut StepContext, _ui: &mut dyn UserInterface) -> Result<()> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn full_ci_run_round_trips_artifact() {
    let temp = TempDir::new().unwrap();
    let mut ui = MockUI::new();

    let result = WorkflowRunner::new(temp.path())
        .run(&Workflow::ci(EnvSnapshot::capture_with(|_| None)), &mut ui)
        .unwrap();

    assert!(result.success);
    assert_eq!(result.exit_code(), 0);
    assert!(ui.has_message(&format!("Contenido de output.txt: {}", ARTIFACT_CONTENT)));
}

#[test]
fn build_never_runs_after_failed_test() {
    let temp = TempDir::new().unwrap();
    let runs = Arc::new(AtomicUsize::new(0));
    let workflow = Workflow::new("custom")
        .step(WriteArtifactStep::new("test", "no/such/dir/output.txt", "x"))
        .step(CountingStep {
            name: "build",
            needs: Some("test"),
            runs: Arc::clone(&runs),
        });

    let result = WorkflowRunner::new(temp.path())
        .run(&workflow, &mut MockUI::new())
        .unwrap();

    assert_eq!(result.exit_code(), 1);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(result.step("test").unwrap().status, StepStatus::Failed);
    assert_eq!(result.step("build").unwrap().status, StepStatus::Skipped);
}

#[test]
fn forced_read_failure_exits_one() {
    let temp = TempDir::new().unwrap();
    let artifact = temp.path().join("output.txt");
    let mut ui = MockUI::new();

    let result = WorkflowRunner::new(temp.path())
        .run_with_progress(
            &Workflow::ci(EnvSnapshot::capture_with(|_| None)),
            &mut ui,
            |event| {
                if let RunProgress::StepFinished { name: "test", .. } = event {
                    fs::remove_file(&artifact).unwrap();
                }
            },
        )
        .unwrap();

    assert_eq!(result.exit_code(), 1);
    let build = result.step("build").unwrap();
    assert_eq!(build.status, StepStatus::Failed);
    assert!(build.error.as_deref().unwrap().contains("output.txt"));
    assert!(!ui.has_success("Job BUILD"));
}

#[test]
fn round_trip_for_custom_literal() {
    let temp = TempDir::new().unwrap();
    let literal = "línea uno\nlínea dos ✓";
    let workflow = Workflow::new("custom")
        .step(WriteArtifactStep::new("test", "artifact.txt", literal))
        .step(ReadArtifactStep::new("build", "test", "artifact.txt"));
    let mut ui = MockUI::new();

    let result = WorkflowRunner::new(temp.path()).run(&workflow, &mut ui).unwrap();

    assert!(result.success);
    assert_eq!(fs::read(temp.path().join("artifact.txt")).unwrap(), literal.as_bytes());
    assert!(ui.has_message(&format!("Contenido de artifact.txt: {}", literal)));
}

#[test]
fn invalid_workflow_is_rejected_before_running() {
    let temp = TempDir::new().unwrap();
    let runs = Arc::new(AtomicUsize::new(0));
    let workflow = Workflow::new("bad")
        .step(CountingStep {
            name: "first",
            needs: None,
            runs: Arc::clone(&runs),
        })
        .step(CountingStep {
            name: "second",
            needs: Some("later"),
            runs: Arc::clone(&runs),
        });

    let err = WorkflowRunner::new(temp.path())
        .run(&workflow, &mut MockUI::new())
        .unwrap_err();

    assert!(matches!(err, JobsimError::InvalidWorkflow { .. }));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}
