//! Field rendering utilities for forms

use crate::i18n::LayoutDirection;
use crate::ui::leading_alignment;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a bordered single-line form field.
///
/// The label sits on the leading edge of the top border and the value is
/// leading-aligned; under RTL both flip to the right. A trailing hint (the
/// show/hide affordance of secret fields) sits on the opposite corner of the
/// bottom border.
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    direction: LayoutDirection,
    trailing_hint: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Red)),
    ]);

    let mut block = Block::default()
        .title(format!(" {label} "))
        .title_alignment(leading_alignment(direction))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(hint) = trailing_hint {
        let hint_span = Span::styled(format!(" {hint} "), Style::default().fg(Color::DarkGray));
        let hint_line = if direction.is_rtl() {
            Line::from(hint_span).left_aligned()
        } else {
            Line::from(hint_span).right_aligned()
        };
        block = block.title_bottom(hint_line);
    }

    let paragraph = Paragraph::new(content).alignment(leading_alignment(direction));
    frame.render_widget(paragraph.block(block), area);
}
