//! Layout components (content column, status bar)

use crate::app::App;
use crate::platform;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the centered content column (phone-screen proportions)
pub const MAX_CONTENT_WIDTH: u16 = 52;

/// Width of the content column for a given terminal width
pub fn content_width(total_width: u16) -> u16 {
    total_width.min(MAX_CONTENT_WIDTH)
}

/// Horizontal offset of the content column for a given terminal width
pub fn content_x_offset(total_width: u16) -> u16 {
    total_width.saturating_sub(content_width(total_width)) / 2
}

/// Create the main layout: a centered content column above the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Rect {
        x: content_x_offset(area.width),
        y: chunks[0].y,
        width: content_width(area.width),
        height: chunks[0].height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Current locale indicator
    spans.push(Span::styled(
        format!(" {} ", app.state.form.locale().code().to_uppercase()),
        Style::default().bg(Color::Red).fg(Color::White),
    ));

    // Key hints
    let hints = format!(
        " Tab:next  {}:show/hide  {}:language  Enter:login",
        platform::VISIBILITY_SHORTCUT,
        platform::LANGUAGE_SHORTCUT
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Most recent handler error
    if let Some(err) = app.state.last_error() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
