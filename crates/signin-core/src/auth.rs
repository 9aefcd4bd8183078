//! Credential check against the user directory.
//!
//! This is a toy check, not a security boundary: passwords are served in
//! plaintext by the directory and compared verbatim on the client.

use std::fmt;

use tracing::{debug, info};

use crate::directory::{DirectoryClient, DirectoryError, UserRecord};

/// Shown when no record matches the submitted email and password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Shown when the directory cannot be reached or returns something unusable.
pub const CONNECT_FAILURE_MESSAGE: &str = "Could not connect to server. Is json-server running?";

/// A single submitted email/password pair.
///
/// Values are kept exactly as typed: no trimming, no case folding.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a completed check (the directory answered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { display_name: String },
    Rejected,
}

/// Why a login attempt did not produce a session.
#[derive(Debug)]
pub enum AuthFailure {
    /// No record matched. Unknown email and wrong password are not told apart.
    InvalidCredentials,
    /// The directory could not be queried.
    Transport(DirectoryError),
}

impl AuthFailure {
    /// The fixed message shown on the login screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthFailure::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AuthFailure::Transport(_) => CONNECT_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for AuthFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthFailure::InvalidCredentials => None,
            AuthFailure::Transport(err) => Some(err),
        }
    }
}

/// Folds a check result into the display name or the failure to show.
///
/// # Errors
/// Returns [`AuthFailure`] when the check was rejected or failed.
pub fn outcome_to_display_name(
    result: Result<AuthOutcome, DirectoryError>,
) -> Result<String, AuthFailure> {
    match result {
        Ok(AuthOutcome::Authenticated { display_name }) => Ok(display_name),
        Ok(AuthOutcome::Rejected) => Err(AuthFailure::InvalidCredentials),
        Err(err) => Err(AuthFailure::Transport(err)),
    }
}

/// An email worth submitting: non-empty and containing `@`.
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@')
}

/// Returns the first record whose email and password both equal the inputs.
pub fn find_match<'a>(users: &'a [UserRecord], credentials: &Credentials) -> Option<&'a UserRecord> {
    users
        .iter()
        .find(|u| u.email == credentials.email && u.password == credentials.password)
}

/// Fetches the directory once and matches `credentials` against it.
///
/// # Errors
/// Returns [`DirectoryError`] if the directory request fails; a missing
/// match is `Ok(AuthOutcome::Rejected)`.
pub async fn check_credentials(
    client: &DirectoryClient,
    credentials: &Credentials,
) -> Result<AuthOutcome, DirectoryError> {
    debug!(email = %credentials.email, "checking credentials");

    let users = match client.fetch_users().await {
        Ok(users) => users,
        Err(err) => {
            debug!(error = %err, url = %client.users_url(), "user directory unavailable");
            return Err(err);
        }
    };

    match find_match(&users, credentials) {
        Some(user) => {
            info!(email = %user.email, "credentials accepted");
            Ok(AuthOutcome::Authenticated {
                display_name: user.display_name().to_string(),
            })
        }
        None => {
            info!(email = %credentials.email, "credentials rejected");
            Ok(AuthOutcome::Rejected)
        }
    }
}
