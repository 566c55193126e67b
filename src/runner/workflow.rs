//! Sequential workflow execution.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::environment::EnvSnapshot;
use crate::error::{JobsimError, Result};
use crate::steps::{
    ReadArtifactStep, ReportEnvStep, Step, StepContext, StepResult, StepStatus,
    WriteArtifactStep, ARTIFACT_CONTENT, ARTIFACT_PATH,
};
use crate::ui::UserInterface;

/// Progress events emitted during workflow execution.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A step finished, successfully or not.
    StepFinished {
        name: &'a str,
        result: &'a StepResult,
    },
}

/// An ordered list of named steps.
pub struct Workflow {
    name: String,
    steps: Vec<Box<dyn Step>>,
}

impl Workflow {
    /// Create an empty workflow.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// The CI chain: `report-env`, then `test` writes the artifact, then
    /// `build` reads it back.
    pub fn ci(snapshot: EnvSnapshot) -> Self {
        Self::new("ci")
            .step(ReportEnvStep::new(snapshot))
            .step(WriteArtifactStep::new("test", ARTIFACT_PATH, ARTIFACT_CONTENT))
            .step(ReadArtifactStep::new("build", "test", ARTIFACT_PATH))
    }

    /// Workflow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the workflow has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check that names are unique and every dependency names an earlier step.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();

        for step in &self.steps {
            if let Some(dep) = step.needs() {
                if dep == step.name() {
                    return Err(JobsimError::InvalidWorkflow {
                        message: format!("step '{}' depends on itself", dep),
                    });
                }
                if !seen.contains(dep) {
                    return Err(JobsimError::InvalidWorkflow {
                        message: format!(
                            "step '{}' needs '{}', which does not run before it",
                            step.name(),
                            dep
                        ),
                    });
                }
            }
            if !seen.insert(step.name()) {
                return Err(JobsimError::InvalidWorkflow {
                    message: format!("duplicate step '{}'", step.name()),
                });
            }
        }

        Ok(())
    }
}

/// Result of running a workflow.
#[derive(Debug, Serialize)]
pub struct WorkflowResult {
    /// Workflow name.
    pub workflow: String,
    /// One result per step, in execution order.
    pub steps: Vec<StepResult>,
    /// Name of the step that failed, if any.
    pub failed_step: Option<String>,
    /// Total duration.
    #[serde(rename = "duration_ms", serialize_with = "crate::steps::result::serialize_millis")]
    pub duration: Duration,
    /// Whether every step completed.
    pub success: bool,
}

impl WorkflowResult {
    /// Process exit code for this result: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }

    /// Result for a named step.
    pub fn step(&self, name: &str) -> Option<&StepResult> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Number of steps that completed.
    pub fn completed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }
}

/// Runs a workflow's steps in order, stopping at the first failure.
pub struct WorkflowRunner {
    workdir: PathBuf,
}

impl WorkflowRunner {
    /// Create a runner whose steps resolve paths against `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run the workflow.
    pub fn run(&self, workflow: &Workflow, ui: &mut dyn UserInterface) -> Result<WorkflowResult> {
        self.run_with_progress(workflow, ui, |_| {})
    }

    /// Run the workflow with a progress callback.
    ///
    /// A malformed workflow is an error. Step failures are not: they are
    /// reported to the UI and recorded in the returned [`WorkflowResult`].
    pub fn run_with_progress(
        &self,
        workflow: &Workflow,
        ui: &mut dyn UserInterface,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> Result<WorkflowResult> {
        workflow.validate()?;

        let start = Instant::now();
        let total = workflow.len();
        let mut ctx = StepContext::new(self.workdir.clone());
        let mut results: Vec<StepResult> = Vec::with_capacity(total);
        let mut failed_step: Option<String> = None;
        let mut job_number = 0;

        debug!(workflow = %workflow.name(), steps = total, "starting workflow");

        for (index, step) in workflow.steps.iter().enumerate() {
            let name = step.name();

            if let Some(failed) = &failed_step {
                debug!(step = %name, "skipping after failure");
                results.push(StepResult::skipped(name, format!("'{}' failed", failed)));
                continue;
            }

            on_progress(RunProgress::StepStarting { name, index, total });

            if step.is_job() {
                job_number += 1;
                ui.show_header(&format!("JOB {}: {}", job_number, name.to_uppercase()));
            }

            // validate() puts every dependency earlier in the list, and any
            // failure skips the rest, so a step only runs after its dependency.
            let step_start = Instant::now();
            let result = match step.run(&mut ctx, ui) {
                Ok(()) => StepResult::success(name, step_start.elapsed()),
                Err(e) => {
                    debug!(step = %name, error = %e, "step failed");
                    ui.error(&format!("Error en Job {}: {}", name.to_uppercase(), e));
                    failed_step = Some(name.to_string());
                    StepResult::failure(name, step_start.elapsed(), e.to_string())
                }
            };

            on_progress(RunProgress::StepFinished {
                name,
                result: &result,
            });
            results.push(result);
        }

        let result = WorkflowResult {
            workflow: workflow.name().to_string(),
            success: failed_step.is_none(),
            failed_step,
            steps: results,
            duration: start.elapsed(),
        };

        debug!(
            success = result.success,
            completed = result.completed_count(),
            "workflow finished"
        );

        Ok(result)
    }
}
