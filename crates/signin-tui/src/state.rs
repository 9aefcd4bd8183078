//! Application state.
//!
//! ```text
//! AppState
//! ├── session: Session          (display name of the logged-in user)
//! ├── screen: Screen            (Login form or Welcome)
//! ├── task_seq: TaskSeq         (id generator for credential checks)
//! └── credential_check: TaskState (the in-flight check, if any)
//! ```
//!
//! The screen is replaced wholesale on every transition, so a screen never
//! keeps field values or errors from the one before it.

use signin_core::session::Session;
use tracing::info;

use crate::common::{TaskSeq, TaskState};
use crate::login::LoginForm;

/// Which of the two screens is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(LoginForm),
    Welcome,
}

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The one session of this UI.
    pub session: Session,
    pub screen: Screen,
    /// Task id sequence for credential checks.
    pub task_seq: TaskSeq,
    /// Lifecycle of the pending credential check.
    pub credential_check: TaskState,
    /// Directory endpoint, shown in the footer.
    pub users_url: String,
}

impl AppState {
    /// Initial state: logged out, empty login form.
    pub fn new(users_url: String) -> Self {
        Self {
            should_quit: false,
            session: Session::default(),
            screen: Screen::Login(LoginForm::new(None)),
            task_seq: TaskSeq::default(),
            credential_check: TaskState::default(),
            users_url,
        }
    }

    /// Replaces the screen with a fresh login form, showing `error` above it.
    pub fn show_login(&mut self, error: Option<String>) {
        self.screen = Screen::Login(LoginForm::new(error.filter(|e| !e.is_empty())));
    }

    /// Starts a session for `display_name` and shows the welcome screen.
    ///
    /// An empty name never reaches the welcome screen; the login form is shown
    /// instead.
    pub fn show_welcome(&mut self, display_name: String) {
        if self.session.sign_in(display_name) {
            info!("logged in");
            self.screen = Screen::Welcome;
        } else {
            self.show_login(None);
        }
    }

    /// Clears the session and returns to an empty login form.
    pub fn log_out(&mut self) {
        self.session.sign_out();
        info!("logged out");
        self.show_login(None);
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::Welcome) && self.session.is_signed_in()
    }
}
