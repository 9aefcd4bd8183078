//! Events consumed by the reducer.

use crossterm::event::Event;
use signin_core::auth::AuthOutcome;
use signin_core::directory::DirectoryError;

use crate::common::TaskCompleted;

/// Result of one credential check task.
pub type CheckResult = Result<AuthOutcome, DirectoryError>;

#[derive(Debug)]
pub enum UiEvent {
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),

    /// A credential check finished (successfully or not).
    CredentialsChecked(TaskCompleted<CheckResult>),
}
