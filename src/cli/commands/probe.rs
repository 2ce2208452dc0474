//! Probe command implementation.
//!
//! The `preflight probe` command inspects the configured PHP binary and
//! prints what it found as JSON, CLI memory limit included. The output can
//! be replayed later with `check --snapshot`.

use anyhow::Context;

use crate::cli::args::ProbeArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand<'a> {
    context: &'a RunContext,
    args: ProbeArgs,
}

impl<'a> ProbeCommand<'a> {
    /// Create a new probe command.
    pub fn new(context: &'a RunContext, args: ProbeArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ProbeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = self.context.php_runtime()?.snapshot_with_cli_limit();

        let json = if self.args.pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        }
        .context("Failed to serialize runtime snapshot")?;

        ui.data(&json);
        Ok(CommandResult::success())
    }
}
