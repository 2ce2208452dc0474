//! Command implementations.

pub mod check;
pub mod context;
pub mod dispatcher;
pub mod memory;
pub mod probe;

pub use check::CheckCommand;
pub use context::RunContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use memory::MemoryCommand;
pub use probe::ProbeCommand;
