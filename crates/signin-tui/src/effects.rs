//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use signin_core::auth::Credentials;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the user directory and match the submitted credentials.
    CheckCredentials {
        task: TaskId,
        credentials: Credentials,
    },
}
