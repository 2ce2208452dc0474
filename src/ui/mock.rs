//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    details: Vec<String>,
    data: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    ///
    /// Detail lines are only captured when the mode shows them.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured machine-readable output.
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    /// Whether any captured line contains `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.successes
            .iter()
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.details)
            .chain(&self.data)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            self.details.push(msg.to_string());
        }
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }
}
