//! Process execution with captured output and an optional timeout.

use crate::error::{PreflightError, Result};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between polls of a running child.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// First line of stdout, trimmed, if it is not empty.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Timeout (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// The program is started directly, without a shell. When a timeout is set
/// and expires, the child is killed and [`PreflightError::Timeout`] is
/// returned. Failure to start the program is
/// [`PreflightError::RuntimeUnavailable`].
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Spawning {} with {} argument(s)", program, args.len());

    let mut child = cmd
        .spawn()
        .map_err(|e| PreflightError::RuntimeUnavailable {
            binary: program.to_string(),
            message: e.to_string(),
        })?;

    // Drain both pipes on their own threads so a chatty child can't block on
    // a full pipe while we wait for it.
    let stdout_handle = spawn_reader(child.stdout.take());
    let stderr_handle = spawn_reader(child.stderr.take());

    let status = match wait_with_deadline(&mut child, options.timeout)? {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            let seconds = options.timeout.map(|t| t.as_secs()).unwrap_or_default();
            tracing::warn!("{} did not finish within {}s, killed", program, seconds);
            return Err(PreflightError::Timeout {
                command: program.to_string(),
                seconds,
            });
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr))
    }
}

/// Wait for `child`, giving up once `timeout` has passed.
///
/// Returns `Ok(None)` on expiry.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<Option<std::process::ExitStatus>> {
    let Some(timeout) = timeout else {
        return Ok(Some(child.wait()?));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).to_string()
    })
}
