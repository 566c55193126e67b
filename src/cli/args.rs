//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// jobsim - Simulate dependent CI jobs.
#[derive(Debug, Parser)]
#[command(name = "jobsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the artifact is written to (defaults to the current directory)
    #[arg(short = 'C', long, env = "JOBSIM_WORKDIR", value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a JSON run report instead of human output
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Working directory, empty meaning the process working directory.
    pub fn workdir(&self) -> PathBuf {
        self.workdir.clone().unwrap_or_default()
    }
}
