//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::RunContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: RunContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given context.
    pub fn new(context: RunContext) -> Self {
        Self { context }
    }

    /// Get the run context.
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand, `check` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Probe(args)) => {
                let cmd = super::probe::ProbeCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Memory(args)) => {
                let cmd = super::memory::MemoryCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(
                    &self.context,
                    crate::cli::args::CheckArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreflightConfig;
    use std::path::Path;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let ctx = RunContext::new(Path::new("/test"), PreflightConfig::default());
        let dispatcher = CommandDispatcher::new(ctx);
        assert_eq!(dispatcher.context().app_root(), Path::new("/test"));
    }
}
