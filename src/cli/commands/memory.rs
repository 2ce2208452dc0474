//! Memory command implementation.
//!
//! The `preflight memory` command runs only the memory limit comparison.

use crate::cli::args::MemoryArgs;
use crate::error::Result;
use crate::requirements::memory::MINIMUM_MEMORY_LIMIT;
use crate::requirements::{check_memory_limit, MemoryStatus};
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The memory command implementation.
pub struct MemoryCommand<'a> {
    context: &'a RunContext,
    args: MemoryArgs,
}

impl<'a> MemoryCommand<'a> {
    /// Create a new memory command.
    pub fn new(context: &'a RunContext, args: MemoryArgs) -> Self {
        Self { context, args }
    }
}

impl Command for MemoryCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runtime = self.context.runtime(self.args.snapshot.as_deref())?;

        ui.detail(&format!("Service memory limit: {}", runtime.memory_limit()));

        match check_memory_limit(runtime.as_ref()) {
            MemoryStatus::Sufficient => {
                ui.success(&format!("Memory limits are at least {}", MINIMUM_MEMORY_LIMIT));
                Ok(CommandResult::success())
            }
            MemoryStatus::Unverifiable => {
                ui.warning("Could not read the CLI memory limit; memory was not verified");
                Ok(CommandResult::success())
            }
            MemoryStatus::Insufficient(message) => {
                ui.error(&message);
                Ok(CommandResult::failure(1))
            }
        }
    }
}
