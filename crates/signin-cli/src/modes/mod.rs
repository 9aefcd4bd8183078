//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive login screen (optional feature)
//! - non-interactive checks live in `cli::commands::check`

#[cfg(feature = "tui")]
pub use signin_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive(
    _client: signin_core::directory::DirectoryClient,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
