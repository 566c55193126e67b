//! jobsim CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use jobsim::cli::{Cli, RunCommand};
use jobsim::environment::{is_ci, EnvSnapshot};
use jobsim::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("jobsim=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobsim=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("jobsim starting with args: {:?}", cli);

    let mut ui = create_ui(!is_ci(), cli.output_mode(), cli.no_color);
    let snapshot = EnvSnapshot::capture();
    let cmd = RunCommand::new(&cli.workdir(), snapshot).with_json(cli.json);

    match cmd.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code() as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
