//! Integration tests for the preflight binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use preflight::runtime::StaticRuntime;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn preflight(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("preflight"));
    cmd.current_dir(root)
        .env_remove("PREFLIGHT_ROOT")
        .env_remove("PREFLIGHT_PHP")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_snapshot(dir: &Path, runtime: &StaticRuntime) -> PathBuf {
    let path = dir.join("runtime.json");
    fs::write(&path, serde_json::to_string(runtime.snapshot()).unwrap()).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check that PHP and the filesystem"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_snapshot_passes_and_creates_folders() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_snapshot(temp.path(), &StaticRuntime::complete());

    preflight(temp.path())
        .arg("check")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("All basic requirements are fulfilled"));

    assert!(temp.path().join("Web/_Resources").is_dir());
    Ok(())
}

#[test]
fn check_reports_missing_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_snapshot(
        temp.path(),
        &StaticRuntime::complete().without_extension("tokenizer"),
    );

    preflight(temp.path())
        .args(["--verbose", "check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Environment requirements not fulfilled",
        ))
        .stdout(predicate::str::contains("\"tokenizer\""))
        .stdout(predicate::str::contains("Error code: 1329403180"));
    Ok(())
}

#[test]
fn check_json_reports_low_memory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_snapshot(
        temp.path(),
        &StaticRuntime::complete()
            .with_memory_limit("64M")
            .with_cli_memory_limit("64M"),
    );

    let output = preflight(temp.path())
        .args(["check", "--json", "--snapshot"])
        .arg(&snapshot)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(value["code"].is_null());
    assert!(value["message"]
        .as_str()
        .unwrap()
        .starts_with("Your memory limit is too low! With 64M"));
    Ok(())
}

#[test]
fn check_uses_root_flag() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let app = TempDir::new()?;
    let snapshot = write_snapshot(cwd.path(), &StaticRuntime::complete());

    preflight(cwd.path())
        .arg("--root")
        .arg(app.path())
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success();

    assert!(app.path().join("Configuration").is_dir());
    assert!(!cwd.path().join("Configuration").exists());
    Ok(())
}

#[test]
fn invalid_config_is_operational_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".preflight"))?;
    fs::write(temp.path().join(".preflight/config.yml"), "unknown_key: 1\n")?;

    preflight(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn missing_php_binary_is_operational_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    preflight(temp.path())
        .args(["--php", "/nonexistent/preflight/php", "check"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("/nonexistent/preflight/php"));
    Ok(())
}

#[cfg(unix)]
mod with_fake_php {
    use super::*;
    use preflight::requirements::catalog::{REQUIRED_EXTENSIONS, REQUIRED_FUNCTIONS};
    use std::os::unix::fs::PermissionsExt;

    /// Install a shell script standing in for `php`.
    ///
    /// The probe is answered with a complete runtime whose memory limit is
    /// `service`; the CLI memory query prints `cli`.
    fn install_fake_php(dir: &Path, service: &str, cli: &str) -> PathBuf {
        let mut probe = String::from("version\t8.2.0\nextension\tmbstring\n");
        for entry in REQUIRED_EXTENSIONS {
            probe.push_str(&format!("extension\t{}\n", entry.name));
        }
        for entry in REQUIRED_FUNCTIONS {
            probe.push_str(&format!("function\t{}\t1\n", entry.name));
        }
        probe.push_str("directory_separator\t/\ndoc_comments\t1\nsession_auto_start\t0\n");
        probe.push_str(&format!("memory_limit\t{}\n", service));

        let probe_file = dir.join("probe.txt");
        fs::write(&probe_file, probe).unwrap();

        let php = dir.join("fake-php");
        fs::write(
            &php,
            format!(
                "#!/bin/sh\ncase \"$*\" in\n  *get_loaded_extensions*) cat '{}' ;;\n  *) printf '%s' '{}' ;;\nesac\n",
                probe_file.display(),
                cli
            ),
        )
        .unwrap();
        fs::set_permissions(&php, fs::Permissions::from_mode(0o755)).unwrap();
        php
    }

    fn configure(dir: &Path, php: &Path) {
        fs::create_dir_all(dir.join(".preflight")).unwrap();
        fs::write(
            dir.join(".preflight/config.yml"),
            format!("php_binary: \"{}\"\n", php.display()),
        )
        .unwrap();
    }

    #[test]
    fn check_against_binary_passes() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "256M", "512M");
        configure(temp.path(), &php);

        preflight(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("All basic requirements are fulfilled"));
        Ok(())
    }

    #[test]
    fn low_cli_limit_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "256M", "64M");
        configure(temp.path(), &php);

        preflight(temp.path())
            .arg("memory")
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Your memory limit for the CLI is too low! With 64M",
            ));
        Ok(())
    }

    #[test]
    fn silent_cli_only_judges_service() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "256M", "");
        configure(temp.path(), &php);

        preflight(temp.path()).arg("memory").assert().success();
        Ok(())
    }

    #[test]
    fn php_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join(".preflight"))?;
        fs::write(
            temp.path().join(".preflight/config.yml"),
            "php_binary: /nonexistent/php\n",
        )?;
        let php = install_fake_php(temp.path(), "1G", "1G");

        preflight(temp.path())
            .arg("--php")
            .arg(&php)
            .arg("check")
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn replayed_snapshot_matches_live_check_for_low_cli_limit(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "256M", "64M");

        let live = preflight(temp.path())
            .arg("--php")
            .arg(&php)
            .arg("check")
            .output()?;
        assert_eq!(live.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&live.stdout)
            .contains("Your memory limit for the CLI is too low! With 64M"));

        let saved = preflight(temp.path())
            .arg("--php")
            .arg(&php)
            .arg("probe")
            .output()?;
        assert!(saved.status.success());
        let snapshot = temp.path().join("saved.json");
        fs::write(&snapshot, &saved.stdout)?;

        let replay = preflight(temp.path())
            .args(["check", "--snapshot"])
            .arg(&snapshot)
            .output()?;
        assert_eq!(replay.status.code(), live.status.code());
        assert_eq!(replay.stdout, live.stdout);
        Ok(())
    }

    #[test]
    fn hanging_cli_query_is_not_verified() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "256M", "64M");
        let hanging = temp.path().join("hanging-php");
        fs::write(
            &hanging,
            format!(
                "#!/bin/sh\ncase \"$*\" in\n  *get_loaded_extensions*) exec '{}' \"$@\" ;;\n  *) exec sleep 5 ;;\nesac\n",
                php.display()
            ),
        )?;
        fs::set_permissions(&hanging, fs::Permissions::from_mode(0o755))?;
        fs::create_dir_all(temp.path().join(".preflight"))?;
        fs::write(
            temp.path().join(".preflight/config.yml"),
            format!("php_binary: \"{}\"\ncli_timeout_secs: 1\n", hanging.display()),
        )?;

        let start = std::time::Instant::now();
        preflight(temp.path())
            .arg("memory")
            .assert()
            .success()
            .stdout(predicate::str::contains("Could not read the CLI memory limit"));
        assert!(start.elapsed() < std::time::Duration::from_secs(4));
        Ok(())
    }

    #[test]
    fn probe_output_replays_with_snapshot() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let php = install_fake_php(temp.path(), "96M", "96M");

        let output = preflight(temp.path())
            .arg("--php")
            .arg(&php)
            .arg("probe")
            .output()?;
        assert!(output.status.success());

        let snapshot = temp.path().join("saved.json");
        fs::write(&snapshot, &output.stdout)?;

        preflight(temp.path())
            .args(["check", "--snapshot"])
            .arg(&snapshot)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("With 96M"));
        Ok(())
    }
}
