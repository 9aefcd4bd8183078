//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a daily rolling file
//! under `${SIGNIN_HOME}/logs`. Non-interactive commands log to stderr.
//! `SIGNIN_LOG` (EnvFilter syntax) overrides the configured level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SIGNIN_LOG";
const LOG_FILE_PREFIX: &str = "signin.log";

const FALLBACK_LEVEL: &str = "warn";

/// Builds the filter from `SIGNIN_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref(), default_level)
}

/// First valid filter of `directives`, `default_level`, then `warn`.
fn filter_from(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}

/// Installs a subscriber writing to a rolling file in `dir`.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global
/// subscriber is already installed.
pub fn init_file(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install file logger: {e}"))?;

    Ok(guard)
}

/// Installs a subscriber writing to stderr.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install stderr logger: {e}"))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_env_directives_override_configured_level() {
        assert_eq!(filter_from(Some("debug"), "info").to_string(), "debug");
    }

    #[test]
    fn test_configured_level_used_without_env() {
        assert_eq!(filter_from(None, "info").to_string(), "info");
    }

    #[test]
    fn test_invalid_env_directives_fall_back_to_configured_level() {
        assert_eq!(filter_from(Some("signin=loud"), "error").to_string(), "error");
    }

    #[test]
    fn test_invalid_configured_level_falls_back_to_warn() {
        assert_eq!(filter_from(None, "signin=loud").to_string(), "warn");
    }

    #[test]
    fn test_init_file_creates_log_dir() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("nested").join("logs");

        let guard = init_file(&logs, "info").unwrap();
        assert!(logs.is_dir());

        // Only one global subscriber per process.
        assert!(init_file(&logs, "info").is_err());
        drop(guard);
    }
}
