//! Welcome screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{centered_rect, render_container};
use crate::view::WelcomeView;

const WELCOME_WIDTH: u16 = 52;
const WELCOME_HEIGHT: u16 = 9;

/// Renders the greeting and the logout control centered in `area`.
pub fn render_welcome(frame: &mut Frame, area: Rect, view: &WelcomeView<'_>) {
    let popup = centered_rect(area, WELCOME_WIDTH, WELCOME_HEIGHT);
    let inner = render_container(frame, popup, "Welcome", Color::Green);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {}!", view.display_name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from("You are now logged in."),
        Line::from(""),
        Line::from(Span::styled(
            "[ Logout ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter log out · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
