//! Execution time limits of the validator process.
//!
//! PHP itself is always started with `max_execution_time=0`; this module
//! covers the CPU-time rlimit the validator (and every child it spawns)
//! inherits from its parent.

use std::io;

/// Raise the soft CPU-time limit to the hard limit.
///
/// Does nothing when the soft limit is already at the hard limit.
#[cfg(unix)]
pub fn lift_cpu_time_limit() -> io::Result<()> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };

    // SAFETY: getrlimit writes into the rlimit struct we own.
    if unsafe { libc::getrlimit(libc::RLIMIT_CPU, &mut limit) } != 0 {
        return Err(io::Error::last_os_error());
    }

    if limit.rlim_cur == limit.rlim_max {
        return Ok(());
    }

    limit.rlim_cur = limit.rlim_max;
    // SAFETY: setrlimit only reads the rlimit struct we pass.
    if unsafe { libc::setrlimit(libc::RLIMIT_CPU, &limit) } != 0 {
        return Err(io::Error::last_os_error());
    }

    tracing::debug!("Raised CPU time limit to the hard limit");
    Ok(())
}

/// No CPU-time rlimit exists on this platform.
#[cfg(not(unix))]
pub fn lift_cpu_time_limit() -> io::Result<()> {
    Ok(())
}

/// ini overrides passed to every PHP invocation.
pub fn php_time_limit_args() -> Vec<String> {
    vec!["-d".to_string(), "max_execution_time=0".to_string()]
}
