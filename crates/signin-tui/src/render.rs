//! Pure render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::login::render_login;
use crate::state::AppState;
use crate::view::{View, view};
use crate::welcome::render_welcome;

/// Height of the footer line showing the directory endpoint.
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .areas(frame.area());

    match view(app) {
        View::Login(login) => render_login(frame, body, &login),
        View::Welcome(welcome) => render_welcome(frame, body, &welcome),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" Directory: {}", app.users_url),
            Style::default().fg(Color::DarkGray),
        )),
        footer,
    );
}
