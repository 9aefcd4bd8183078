//! Non-interactive credential check.

use anyhow::{Context, Result};
use signin_core::auth::{self, Credentials};
use signin_core::config::Config;
use signin_core::directory::DirectoryClient;
use signin_core::logging;
use tracing::debug;

/// Runs one check and reports it like the login screen would.
///
/// Prints `Welcome, {name}!` on success. On failure the login screen's
/// message becomes the error, so the process exits non-zero with it on stderr.
pub async fn run(config: &Config, email: String, password: String) -> Result<()> {
    logging::init_stderr(&config.log_level).context("init logging")?;

    let client = DirectoryClient::from_config(config).context("build directory client")?;
    let credentials = Credentials::new(email, password);

    let result = auth::check_credentials(&client, &credentials).await;
    match auth::outcome_to_display_name(result) {
        Ok(display_name) => {
            println!("Welcome, {display_name}!");
            Ok(())
        }
        Err(failure) => {
            debug!(error = ?failure, "check failed");
            anyhow::bail!("{}", failure.user_message())
        }
    }
}
