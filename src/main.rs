//! Preflight CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use preflight::cli::{Cli, CommandDispatcher, RunContext};
use preflight::config::PreflightConfig;
use preflight::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for failures that prevented the checks from running.
const OPERATIONAL_ERROR_EXIT: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("preflight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("preflight=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Preflight starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    let mut ui = create_ui(output_mode, !cli.no_color);

    // Determine application root
    let app_root = cli
        .root
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let overrides = PreflightConfig {
        php_binary: cli.php.clone(),
        ..Default::default()
    };

    let context = match RunContext::load(&app_root, cli.config.as_deref(), overrides) {
        Ok(context) => context,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(OPERATIONAL_ERROR_EXIT);
        }
    };

    // Dispatch command
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(OPERATIONAL_ERROR_EXIT)
        }
    }
}
