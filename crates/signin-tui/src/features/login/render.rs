//! Login screen view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::Field;
use crate::common::{centered_rect, render_container};
use crate::view::LoginView;

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 14;

/// Renders the login form centered in `area`.
pub fn render_login(frame: &mut Frame, area: Rect, view: &LoginView<'_>) {
    let popup = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);
    let inner = render_container(frame, popup, "Login", Color::Cyan);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let [error_row, _, email_row, password_row, _, submit_row, _, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    if let Some(error) = view.error {
        let para = Paragraph::new(Span::styled(error, Style::default().fg(Color::Red)))
            .alignment(Alignment::Center);
        frame.render_widget(para, error_row);
    }

    render_input(frame, email_row, "Email", view.email, Field::Email, view);
    render_input(
        frame,
        password_row,
        "Password",
        &view.masked_password,
        Field::Password,
        view,
    );

    let submit_style = if view.focus == Field::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[ Login ]", submit_style)).alignment(Alignment::Center),
        submit_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab next field · Enter log in · Esc quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        hint_row,
    );
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    field: Field,
    view: &LoginView<'_>,
) {
    let focused = view.focus == field;
    let invalid = view.invalid == Some(field);

    let border_color = if invalid {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = if invalid {
        format!(" {label} (required) ")
    } else {
        format!(" {label} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let text_area = block.inner(area);
    frame.render_widget(block, area);

    if value.is_empty() {
        if !focused {
            frame.render_widget(
                Paragraph::new(Span::styled(label, Style::default().fg(Color::DarkGray))),
                text_area,
            );
        }
    } else {
        let visible = tail_fitting(value, text_area.width.saturating_sub(1) as usize);
        frame.render_widget(Paragraph::new(visible), text_area);
    }

    if focused {
        let shown = tail_fitting(value, text_area.width.saturating_sub(1) as usize);
        let x = text_area.x + shown.width() as u16;
        frame.set_cursor_position((x, text_area.y));
    }
}

/// Longest suffix of `s` whose display width fits in `max_width`.
fn tail_fitting(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fitting_keeps_short_text() {
        assert_eq!(tail_fitting("a@x.com", 20), "a@x.com");
    }

    #[test]
    fn test_tail_fitting_keeps_end_of_long_text() {
        assert_eq!(tail_fitting("abcdefgh", 3), "fgh");
        assert_eq!(tail_fitting("abc", 0), "");
    }

    #[test]
    fn test_tail_fitting_counts_wide_chars() {
        assert_eq!(tail_fitting("ab日本", 3), "本");
    }
}
