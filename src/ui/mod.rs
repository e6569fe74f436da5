//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login;
mod shortcuts;

pub use layout::{content_width, content_x_offset, MAX_CONTENT_WIDTH};

use crate::app::App;
use crate::i18n::LayoutDirection;
use ratatui::layout::Alignment;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);
    login::draw(frame, content_area, app);
    layout::draw_status_bar(frame, app);
}

/// Alignment of the leading edge for the given layout direction
pub(crate) fn leading_alignment(direction: LayoutDirection) -> Alignment {
    if direction.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}
