//! The `report-env` step.

use tracing::debug;

use crate::environment::EnvSnapshot;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Step, StepContext};

/// Prints each tracked variable as `KEY = value`. Cannot fail.
#[derive(Debug, Clone)]
pub struct ReportEnvStep {
    snapshot: EnvSnapshot,
}

impl ReportEnvStep {
    /// Create the step for a captured snapshot.
    pub fn new(snapshot: EnvSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Step for ReportEnvStep {
    fn name(&self) -> &str {
        "report-env"
    }

    fn is_job(&self) -> bool {
        false
    }

    fn run(&self, _ctx: &mut StepContext, ui: &mut dyn UserInterface) -> Result<()> {
        for entry in self.snapshot.entries() {
            debug!(key = %entry.key, source = %entry.source, "reporting variable");
            ui.message(&format!("{} = {}", entry.key, entry.value));
            ui.detail(&format!("{} from {}", entry.key, entry.source));
        }
        Ok(())
    }
}
