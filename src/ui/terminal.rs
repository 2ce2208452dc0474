//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, PreflightTheme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: PreflightTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            PreflightTheme::new()
        } else {
            PreflightTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn data(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}
