//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, JobsimTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Terminal UI implementation with colored output.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: JobsimTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            JobsimTheme::new()
        } else {
            JobsimTheme::plain()
        };

        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: JobsimTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_banners() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "  {}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_banners() {
            writeln!(self.out, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the current environment.
///
/// A styled [`TerminalUI`] is only used when `interactive` is set and stdout
/// is a terminal; everything else gets plain [`NonInteractiveUI`] lines.
pub fn create_ui(interactive: bool, mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        if no_color {
            Box::new(TerminalUI::with_theme(mode, JobsimTheme::plain()))
        } else {
            Box::new(TerminalUI::new(mode))
        }
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
