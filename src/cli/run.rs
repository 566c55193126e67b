//! Run command implementation.
//!
//! Runs the CI workflow and hands its [`WorkflowResult`] back to `main`,
//! which maps it to the process exit code.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::environment::EnvSnapshot;
use crate::error::Result;
use crate::runner::{Workflow, WorkflowResult, WorkflowRunner};
use crate::ui::UserInterface;

/// Machine-readable report printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Variables reported by the run.
    pub environment: &'a EnvSnapshot,
    /// Outcome of every step.
    #[serde(flatten)]
    pub result: &'a WorkflowResult,
}

/// The run command implementation.
pub struct RunCommand {
    workdir: PathBuf,
    snapshot: EnvSnapshot,
    json: bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(workdir: &Path, snapshot: EnvSnapshot) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            snapshot,
            json: false,
        }
    }

    /// Print a JSON report to stdout when the run ends.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Run the workflow, print the per-step summary and, with `--json`, the
    /// report.
    ///
    /// A failed step is not an error here: it shows up in the returned
    /// result with a non-zero [`WorkflowResult::exit_code`].
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<WorkflowResult> {
        let workflow = Workflow::ci(self.snapshot.clone());
        let result = WorkflowRunner::new(&self.workdir).run(&workflow, ui)?;

        for step in &result.steps {
            ui.detail(&step.summary_line());
        }

        if self.json {
            println!("{}", self.render_report(&result)?);
        }

        Ok(result)
    }

    /// Render the JSON report for a finished run.
    pub fn render_report(&self, result: &WorkflowResult) -> Result<String> {
        let report = RunReport {
            environment: &self.snapshot,
            result,
        };
        let json = serde_json::to_string_pretty(&report).context("serializing run report")?;
        Ok(json)
    }
}
