//! Step status and results.

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Status of a step in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step completed successfully.
    Completed,

    /// Step failed.
    Failed,

    /// Step never ran because an earlier step failed.
    Skipped,
}

impl StepStatus {
    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
            StepStatus::Skipped => '⊘',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Result of one step in a run.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    /// Step name.
    pub name: String,

    /// Final status.
    pub status: StepStatus,

    /// Execution duration.
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,

    /// Error message (if failed or skipped).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepResult {
    /// Create a success result.
    pub fn success(name: &str, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Completed,
            duration,
            error: None,
        }
    }

    /// Create a failure result.
    pub fn failure(name: &str, duration: Duration, error: String) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Failed,
            duration,
            error: Some(error),
        }
    }

    /// Create a result for a step that never ran.
    pub fn skipped(name: &str, reason: String) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Skipped,
            duration: Duration::ZERO,
            error: Some(reason),
        }
    }

    /// Generate a summary line for display.
    pub fn summary_line(&self) -> String {
        match self.status {
            StepStatus::Completed => format!(
                "{} {} ({})",
                self.status.display_char(),
                self.name,
                format_duration(self.duration)
            ),
            StepStatus::Failed | StepStatus::Skipped => {
                let error = self.error.as_deref().unwrap_or("unknown error");
                format!("{} {} - {}", self.status.display_char(), self.name, error)
            }
        }
    }
}

pub(crate) fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Format a duration for display (`12ms`, `1.2s`, `2m 5s`).
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
