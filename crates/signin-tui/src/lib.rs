//! Full-screen TUI for the signin flow.
//!
//! Elm-style layout: `update` is the only place state changes, `view` and
//! `render` are pure, and `runtime` owns the terminal and executes effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod view;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{login, welcome};
pub use runtime::TuiRuntime;
use signin_core::directory::DirectoryClient;

use crate::state::AppState;

/// Runs the interactive login screen until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal cannot be
/// set up or drawn to.
pub async fn run_interactive(client: DirectoryClient) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The login screen requires a terminal.\n\
             Use `signin check --email ... --password ...` for non-interactive checks."
        );
    }

    let state = AppState::new(client.users_url().to_string());
    let mut runtime = TuiRuntime::new(state, client)?;
    runtime.run()
}
