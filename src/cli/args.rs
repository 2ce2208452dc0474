//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Preflight - Check that PHP and the filesystem are ready before the application starts.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .preflight/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the application root (overrides current directory)
    #[arg(short, long, global = true, env = "PREFLIGHT_ROOT")]
    pub root: Option<PathBuf>,

    /// PHP binary to inspect (overrides config)
    #[arg(long, global = true, env = "PREFLIGHT_PHP")]
    pub php: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check all basic requirements (default if no command specified)
    Check(CheckArgs),

    /// Print what was detected about the PHP runtime
    Probe(ProbeArgs),

    /// Compare the web server and CLI memory limits only
    Memory(MemoryArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Check against a snapshot saved by `preflight probe` instead of running PHP
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `memory` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MemoryArgs {
    /// Check against a snapshot saved by `preflight probe` instead of running PHP
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}
