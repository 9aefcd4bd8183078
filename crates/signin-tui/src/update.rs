//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signin_core::auth::{AuthFailure, outcome_to_display_name};
use tracing::{debug, info, warn};

use crate::common::TaskCompleted;
use crate::effects::UiEffect;
use crate::events::{CheckResult, UiEvent};
use crate::login::{LoginAction, handle_login_key, handle_login_paste};
use crate::state::{AppState, Screen};
use crate::welcome::{WelcomeAction, handle_welcome_key};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::CredentialsChecked(completed) => {
            handle_check_result(app, completed);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if let Screen::Login(form) = &mut app.screen {
                handle_login_paste(form, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match &mut app.screen {
        Screen::Login(form) => match handle_login_key(form, key) {
            LoginAction::None => vec![],
            LoginAction::Quit => vec![UiEffect::Quit],
            LoginAction::Submit => submit_login(app),
        },
        Screen::Welcome => match handle_welcome_key(key) {
            WelcomeAction::None => vec![],
            WelcomeAction::Quit => vec![UiEffect::Quit],
            WelcomeAction::Logout => {
                app.log_out();
                vec![]
            }
        },
    }
}

/// Validates the form and starts a credential check.
///
/// A submit while a check is still in flight is ignored.
fn submit_login(app: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(form) = &mut app.screen else {
        return vec![];
    };

    if app.credential_check.is_running() {
        debug!("submit ignored: credential check already in flight");
        return vec![];
    }

    match form.validate() {
        Ok(credentials) => {
            form.invalid = None;
            let task = app.task_seq.next_id();
            app.credential_check.on_started(task);
            debug!(task = task.0, "starting credential check");
            vec![UiEffect::CheckCredentials { task, credentials }]
        }
        Err(field) => {
            form.flag_invalid(field);
            vec![]
        }
    }
}

/// Applies a finished check: welcome on match, login with a message otherwise.
fn handle_check_result(app: &mut AppState, completed: TaskCompleted<CheckResult>) {
    if !app.credential_check.finish_if_active(completed.id) {
        debug!(task = completed.id.0, "dropping stale credential check result");
        return;
    }

    match outcome_to_display_name(completed.result) {
        Ok(display_name) => app.show_welcome(display_name),
        Err(failure) => {
            if let AuthFailure::Transport(err) = &failure {
                warn!(error = %err, "user directory unavailable");
            } else {
                info!("login rejected");
            }
            app.show_login(Some(failure.user_message().to_string()));
        }
    }
}
