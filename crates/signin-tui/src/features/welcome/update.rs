//! Welcome screen key handling.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    None,
    Logout,
    Quit,
}

/// Maps a key on the welcome screen to an action. The logout control is the
/// only interactive element.
pub fn handle_welcome_key(key: KeyEvent) -> WelcomeAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ' | 'l' | 'L') => WelcomeAction::Logout,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => WelcomeAction::Quit,
        _ => WelcomeAction::None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_enter_logs_out() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(handle_welcome_key(key), WelcomeAction::Logout);
    }

    #[test]
    fn test_q_quits_and_other_keys_do_nothing() {
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_welcome_key(quit), WelcomeAction::Quit);

        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_welcome_key(other), WelcomeAction::None);
    }
}
