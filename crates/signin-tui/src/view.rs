//! Declarative screen description.
//!
//! `view` maps state to exactly one of the two screens. `render` draws
//! whatever `view` returns, so equal states always draw equal screens.

use crate::login::{Field, LoginForm};
use crate::state::{AppState, Screen};

const PASSWORD_MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Login(LoginView<'a>),
    Welcome(WelcomeView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView<'a> {
    pub error: Option<&'a str>,
    pub email: &'a str,
    pub masked_password: String,
    pub focus: Field,
    pub invalid: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeView<'a> {
    pub display_name: &'a str,
}

impl<'a> LoginView<'a> {
    fn from_form(form: &'a LoginForm) -> Self {
        Self {
            error: form.error.as_deref(),
            email: &form.email,
            masked_password: PASSWORD_MASK.to_string().repeat(form.password.chars().count()),
            focus: form.focus,
            invalid: form.invalid,
        }
    }

    fn empty() -> Self {
        Self {
            error: None,
            email: "",
            masked_password: String::new(),
            focus: Field::Email,
            invalid: None,
        }
    }
}

/// Describes the screen for the current state.
pub fn view(app: &AppState) -> View<'_> {
    match &app.screen {
        Screen::Login(form) => View::Login(LoginView::from_form(form)),
        Screen::Welcome => match app.session.display_name() {
            Some(display_name) => View::Welcome(WelcomeView { display_name }),
            None => View::Login(LoginView::empty()),
        },
    }
}
