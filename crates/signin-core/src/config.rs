//! Configuration management for signin.
//!
//! Loads configuration from ${SIGNIN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub mod paths {
    //! Path resolution for signin configuration and log directories.
    //!
    //! SIGNIN_HOME resolution order:
    //! 1. SIGNIN_HOME environment variable (if set)
    //! 2. ~/.config/signin (default)
    //! 3. ./.signin when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the signin home directory.
    pub fn signin_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNIN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".signin"),
            |h| h.join(".config").join("signin"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signin_home().join("config.toml")
    }

    /// Returns the directory rolling log files are written to.
    pub fn logs_dir() -> PathBuf {
        signin_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint that lists every user record (json-server `/users`)
    pub users_url: String,

    /// Timeout for the user listing request in seconds (0 disables)
    pub request_timeout_secs: u32,

    /// Log filter used when SIGNIN_LOG is not set
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_USERS_URL: &str = "http://localhost:3000/users";
    /// Default is disabled: the transport's own behavior applies
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 0;
    const DEFAULT_LOG_LEVEL: &str = "warn";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Parses `users_url` into a URL.
    ///
    /// # Errors
    /// Returns an error if `users_url` is not an absolute http(s) URL.
    pub fn users_url(&self) -> Result<Url> {
        let url = Url::parse(&self.users_url)
            .with_context(|| format!("Invalid users_url: {}", self.users_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("users_url must use http or https: {}", self.users_url);
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: Self::DEFAULT_USERS_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Commented template written by `signin config init`.
pub fn default_config_template() -> &'static str {
    include_str!("default_config.toml")
}
