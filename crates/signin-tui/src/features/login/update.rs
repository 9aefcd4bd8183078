//! Login screen key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Field, LoginForm};

/// What the reducer should do after a key on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Quit,
}

/// Applies a key to the form. Editing happens in place; submitting and
/// quitting are left to the reducer.
pub fn handle_login_key(form: &mut LoginForm, key: KeyEvent) -> LoginAction {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => LoginAction::Quit,
        KeyCode::Enter => LoginAction::Submit,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            LoginAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            LoginAction::None
        }
        KeyCode::Backspace => {
            form.backspace();
            LoginAction::None
        }
        KeyCode::Char(' ') if form.focus == Field::Submit => LoginAction::Submit,
        KeyCode::Char(c) if !ctrl_or_alt => {
            form.insert_char(c);
            LoginAction::None
        }
        _ => LoginAction::None,
    }
}

/// Applies bracketed-paste text to the focused field.
pub fn handle_login_paste(form: &mut LoginForm, text: &str) {
    form.insert_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits_from_any_field() {
        let mut form = LoginForm::new(None);
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Enter)), LoginAction::Submit);
        form.focus = Field::Password;
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_space_submits_only_on_submit_control() {
        let mut form = LoginForm::new(None);
        form.focus = Field::Password;
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Char(' '))), LoginAction::None);
        assert_eq!(form.password, " ");

        form.focus = Field::Submit;
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Char(' '))), LoginAction::Submit);
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut form = LoginForm::new(None);
        let action = handle_login_key(
            &mut form,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, LoginAction::None);
        assert!(form.email.is_empty());
    }

    #[test]
    fn test_shifted_chars_are_inserted() {
        let mut form = LoginForm::new(None);
        handle_login_key(&mut form, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(form.email, "A");
    }

    #[test]
    fn test_tab_and_backtab_move_focus() {
        let mut form = LoginForm::new(None);
        handle_login_key(&mut form, key(KeyCode::Tab));
        assert_eq!(form.focus, Field::Password);
        handle_login_key(&mut form, key(KeyCode::BackTab));
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn test_esc_quits() {
        let mut form = LoginForm::new(None);
        assert_eq!(handle_login_key(&mut form, key(KeyCode::Esc)), LoginAction::Quit);
    }
}
