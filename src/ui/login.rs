//! Login screen rendering

use super::components::render_button;
use super::forms::draw_field_with_value;
use super::{leading_alignment, shortcuts};
use crate::app::App;
use crate::i18n::{self, MessageKey};
use crate::state::{LoginFocus, PressedButton, FIELD_HEIGHT, SHORTCUTS_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the login screen into the content column.
///
/// The row constraints must stay in sync with the `UiArea` constants used
/// for mouse hit-testing.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let flags = app.state.form.derived();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // top margin
            Constraint::Length(1),                // header
            Constraint::Length(1),                // gap
            Constraint::Length(FIELD_HEIGHT),     // username
            Constraint::Length(1),                // gap
            Constraint::Length(FIELD_HEIGHT),     // password
            Constraint::Length(1),                // forgot link
            Constraint::Length(1),                // gap
            Constraint::Length(FIELD_HEIGHT),     // login button
            Constraint::Length(1),                // help line
            Constraint::Length(1),                // gap
            Constraint::Length(1),                // divider
            Constraint::Length(SHORTCUTS_HEIGHT), // promo shortcuts
            Constraint::Min(0),
        ])
        .split(area);

    let locale = app.state.form.locale();
    let direction = flags.layout_direction;

    draw_header(frame, chunks[1], app);

    draw_field_with_value(
        frame,
        chunks[3],
        i18n::text(locale, app.state.form.username.label),
        app.state.form.username.as_text(),
        app.state.focus == LoginFocus::Username,
        direction,
        None,
    );

    let visibility_hint = if app.state.form.password_visible {
        MessageKey::HidePassword
    } else {
        MessageKey::ShowPassword
    };
    draw_field_with_value(
        frame,
        chunks[5],
        i18n::text(locale, app.state.form.password.label),
        &app.state.form.display_password(),
        app.state.focus == LoginFocus::Password,
        direction,
        Some(i18n::text(locale, visibility_hint)),
    );

    draw_forgot_link(frame, chunks[6], app);

    let login_pressed = app
        .state
        .button_press
        .as_ref()
        .is_some_and(|press| press.button == PressedButton::Login);
    render_button(
        frame,
        chunks[8],
        i18n::text(locale, MessageKey::Login),
        app.state.focus == LoginFocus::Submit,
        flags.login_enabled,
        login_pressed,
    );

    draw_help_line(frame, chunks[9], app);

    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(divider, chunks[11]);

    if app.state.show_shortcuts {
        shortcuts::draw(frame, chunks[12], direction, locale);
    }
}

/// Header row: bank wordmark on the leading side, language toggle on the
/// trailing side. Sides swap under RTL.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.form.locale();
    let direction = app.state.form.layout_direction();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let toggle_pressed = app
        .state
        .button_press
        .as_ref()
        .is_some_and(|press| press.button == PressedButton::LanguageToggle);
    let mut toggle_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD);
    if toggle_pressed {
        toggle_style = toggle_style.add_modifier(Modifier::REVERSED);
    }

    let wordmark = Paragraph::new(Span::styled(
        i18n::text(locale, MessageKey::BankName),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    let toggle = Paragraph::new(Span::styled(
        i18n::text(locale, MessageKey::LanguageToggle),
        toggle_style,
    ));

    // The wordmark leads and the toggle trails
    if direction.is_rtl() {
        frame.render_widget(toggle.alignment(ratatui::layout::Alignment::Left), halves[0]);
        frame.render_widget(
            wordmark.alignment(ratatui::layout::Alignment::Right),
            halves[1],
        );
    } else {
        frame.render_widget(wordmark.alignment(ratatui::layout::Alignment::Left), halves[0]);
        frame.render_widget(
            toggle.alignment(ratatui::layout::Alignment::Right),
            halves[1],
        );
    }
}

fn draw_forgot_link(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.form.locale();
    let direction = app.state.form.layout_direction();

    let link = Paragraph::new(Span::styled(
        i18n::text(locale, MessageKey::ForgotCredentials),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    ))
    .alignment(leading_alignment(direction));

    frame.render_widget(link, area);
}

/// Help text followed by an underlined contact-us fragment
fn draw_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.form.locale();
    let direction = app.state.form.layout_direction();

    let line = Line::from(vec![
        Span::styled(
            i18n::text(locale, MessageKey::Help),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            i18n::text(locale, MessageKey::ContactUs),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(leading_alignment(direction)),
        area,
    );
}
