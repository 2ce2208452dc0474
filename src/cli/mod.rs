//! Command-line interface for preflight.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, MemoryArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, RunContext};
