//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use preflight::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("All requirements fulfilled");
//! assert_eq!(ui.successes(), &["All requirements fulfilled".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PreflightTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display a secondary line, only in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Print machine-readable output. Shown in every mode, never styled.
    fn data(&mut self, text: &str);
}

/// Create the UI for the given mode, honoring `--no-color`.
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, colors && should_use_colors()))
}
