use signin_core::auth::{Credentials, is_plausible_email};

/// Focusable controls of the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Password,
    Submit,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Email => Field::Password,
            Field::Password => Field::Submit,
            Field::Submit => Field::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Email => Field::Submit,
            Field::Password => Field::Email,
            Field::Submit => Field::Password,
        }
    }
}

/// The login form as currently typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: Field,
    /// Message rendered above the form (e.g. a failed check).
    pub error: Option<String>,
    /// Field flagged by the last submit attempt as missing or malformed.
    pub invalid: Option<Field>,
}

impl LoginForm {
    pub fn new(error: Option<String>) -> Self {
        Self {
            error,
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Submit => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.focused_value_mut() {
            value.push(c);
        }
    }

    /// Inserts pasted text into the focused field. Line breaks are dropped;
    /// both fields are single-line.
    pub fn insert_str(&mut self, text: &str) {
        if let Some(value) = self.focused_value_mut() {
            value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            value.pop();
        }
    }

    /// Checks the required fields and returns the credentials to submit.
    ///
    /// Both fields are required and the email must contain `@`. Values are
    /// returned exactly as typed.
    ///
    /// # Errors
    /// Returns the first field that failed.
    pub fn validate(&self) -> Result<Credentials, Field> {
        if !is_plausible_email(&self.email) {
            return Err(Field::Email);
        }
        if self.password.is_empty() {
            return Err(Field::Password);
        }
        Ok(Credentials::new(self.email.clone(), self.password.clone()))
    }

    /// Flags `field` and moves focus to it.
    pub fn flag_invalid(&mut self, field: Field) {
        self.invalid = Some(field);
        self.focus = field;
    }
}
