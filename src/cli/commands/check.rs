//! Check command implementation.
//!
//! The `preflight check` command runs every basic requirement check and
//! reports the first one that is not met.

use anyhow::Context;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::requirements::{BasicRequirements, ValidationError};
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a RunContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a RunContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Run the checks and return the first unmet requirement.
    pub fn find_error(&self) -> Result<Option<ValidationError>> {
        let runtime = self.context.runtime(self.args.snapshot.as_deref())?;

        let mut requirements = BasicRequirements::new(runtime.as_ref(), self.context.app_root());
        if let Some(version) = &self.context.config().minimum_php_version {
            requirements = requirements.with_minimum_version(version);
        }

        tracing::debug!(
            "Checking requirements in {} (PHP >= {})",
            self.context.app_root().display(),
            requirements.minimum_version()
        );

        Ok(requirements.find_error())
    }

    fn report(&self, error: &ValidationError, ui: &mut dyn UserInterface) {
        let title = error.title.as_deref().unwrap_or("Requirement not fulfilled");
        ui.error(title);
        ui.error(&error.render());
        if let Some(code) = error.code {
            ui.detail(&format!("Error code: {}", code));
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let error = self.find_error()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&error)
                .context("Failed to serialize check result")?;
            ui.data(&json);
        } else {
            match &error {
                Some(error) => self.report(error, ui),
                None => ui.success("All basic requirements are fulfilled"),
            }
        }

        Ok(match error {
            Some(_) => CommandResult::failure(1),
            None => CommandResult::success(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::write_snapshot;
    use crate::config::PreflightConfig;
    use crate::requirements::{codes, ENVIRONMENT_ERROR_TITLE};
    use crate::runtime::StaticRuntime;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn run(runtime: &StaticRuntime, json: bool, config: PreflightConfig) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let snapshot = write_snapshot(&temp, runtime);
        let ctx = RunContext::new(temp.path(), config);
        let args = CheckArgs {
            json,
            snapshot: Some(snapshot),
        };
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = CheckCommand::new(&ctx, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn fulfilled_requirements_succeed() {
        let (result, ui) = run(&StaticRuntime::complete(), false, PreflightConfig::default());

        assert!(result.success);
        assert!(ui.has_text("All basic requirements are fulfilled"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn missing_extension_fails_with_code() {
        let runtime = StaticRuntime::complete().without_extension("SPL");
        let (result, ui) = run(&runtime, false, PreflightConfig::default());

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_text(ENVIRONMENT_ERROR_TITLE));
        assert!(ui.has_text("This application requires the PHP extension \"SPL\" to be available."));
        assert!(ui.has_text("Error code: 1329403194"));
    }

    #[test]
    fn json_output_for_success_is_null() {
        let (result, ui) = run(&StaticRuntime::complete(), true, PreflightConfig::default());

        assert!(result.success);
        assert_eq!(ui.data_lines(), &["null".to_string()]);
    }

    #[test]
    fn json_output_carries_error_fields() {
        let runtime = StaticRuntime::complete().with_session_auto_start("1");
        let (result, ui) = run(&runtime, true, PreflightConfig::default());

        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.data_lines()[0]).unwrap();
        assert_eq!(value["code"], codes::SESSION_AUTO_START);
        assert_eq!(value["title"], ENVIRONMENT_ERROR_TITLE);
        assert!(value["arguments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn configured_minimum_version_is_applied() {
        let runtime = StaticRuntime::complete().with_version("8.0.1");
        let config = PreflightConfig {
            minimum_php_version: Some("8.1".into()),
            ..Default::default()
        };
        let (result, ui) = run(&runtime, false, config);

        assert!(!result.success);
        assert!(ui.has_text("PHP version 8.1 or higher"));
        assert!(ui.has_text("currently 8.0.1"));
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        let ctx = RunContext::new(temp.path(), PreflightConfig::default());
        let args = CheckArgs {
            json: false,
            snapshot: Some(temp.path().join("missing.json")),
        };
        let mut ui = MockUI::new();

        assert!(CheckCommand::new(&ctx, args).execute(&mut ui).is_err());
    }
}
