//! Promo shortcut row
//!
//! Static content: four equal columns of icon + caption. Column order
//! reverses under RTL.

use crate::i18n::{self, LayoutDirection, Locale, MessageKey};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// The four promotional shortcuts, in leading-to-trailing order
const SHORTCUTS: [(&str, MessageKey); 4] = [
    ("🛍", MessageKey::Products),
    ("💱", MessageKey::ExchangeRate),
    ("🛡", MessageKey::SecurityTips),
    ("🏧", MessageKey::NearestBranch),
];

pub fn draw(frame: &mut Frame, area: Rect, direction: LayoutDirection, locale: Locale) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let mut items = SHORTCUTS;
    if direction.is_rtl() {
        items.reverse();
    }

    for (column, (icon, key)) in columns.iter().zip(items) {
        draw_shortcut(frame, *column, icon, i18n::text(locale, key));
    }
}

fn draw_shortcut(frame: &mut Frame, area: Rect, icon: &str, caption: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // gap
            Constraint::Length(1), // icon
            Constraint::Length(1), // gap
            Constraint::Min(0),    // caption (wrapped)
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(icon).alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        rows[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_shortcuts_with_distinct_labels() {
        let mut keys: Vec<_> = SHORTCUTS.iter().map(|(_, key)| *key).collect();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_every_shortcut_resolves_in_both_locales() {
        for (_, key) in SHORTCUTS {
            assert!(!i18n::text(Locale::En, key).is_empty());
            assert!(!i18n::text(Locale::Ar, key).is_empty());
        }
    }
}
