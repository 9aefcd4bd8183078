//! Interactive login screen command.

use anyhow::{Context, Result};
use signin_core::config::{Config, paths};
use signin_core::directory::DirectoryClient;
use signin_core::logging;
use tracing::info;

use crate::modes;

pub async fn run(config: &Config) -> Result<()> {
    // The terminal is owned by the TUI, so logs go to a file.
    let _log_guard = logging::init_file(&paths::logs_dir(), &config.log_level)
        .context("init logging")?;

    let client = DirectoryClient::from_config(config).context("build directory client")?;
    info!(url = %client.users_url(), "starting login screen");

    modes::run_interactive(client)
        .await
        .context("login screen failed")?;

    Ok(())
}
