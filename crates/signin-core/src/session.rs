//! The single in-memory session.
//!
//! Holds the display name of the logged-in user, or nothing. It lives only
//! as long as the owning UI state; nothing is persisted.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    display_name: Option<String>,
}

impl Session {
    /// Starts a session for `display_name`.
    ///
    /// Returns `false` and leaves the session untouched if the name is empty.
    pub fn sign_in(&mut self, display_name: impl Into<String>) -> bool {
        let name = display_name.into();
        if name.is_empty() {
            return false;
        }
        self.display_name = Some(name);
        true
    }

    /// Clears the session.
    pub fn sign_out(&mut self) {
        self.display_name = None;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.display_name.is_some()
    }
}
