//! Application state and core logic

use crate::auth::LoginHandler;
use crate::config::TuiConfig;
use crate::i18n::Locale;
use crate::platform;
use crate::state::{AppState, LoginFocus, PressedButton, UiArea};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Width of the show/hide click zone on the trailing edge of the password
/// field
const VISIBILITY_ZONE_WIDTH: u16 = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Host-supplied login action
    handler: Box<dyn LoginHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, handler: Box<dyn LoginHandler>) -> Self {
        let locale = match config.default_locale.as_deref() {
            Some(code) => Locale::from_code(code).unwrap_or_else(|| {
                tracing::warn!(code, "unknown locale in config, using system default");
                Locale::system_default()
            }),
            None => Locale::system_default(),
        };

        let mut state = AppState::new(locale);
        state.show_shortcuts = config.show_shortcuts.unwrap_or(true);

        Self {
            state,
            handler,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Clear the press-flash animation once it has expired
    pub fn update_button_press(&mut self) {
        if let Some(ref press) = self.state.button_press {
            if press.is_expired() {
                self.state.button_press = None;
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Toggle shortcuts work regardless of focus
        if key.modifiers.contains(platform::SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('l') => {
                    self.toggle_locale();
                    return Ok(());
                }
                KeyCode::Char('p') => {
                    self.toggle_password_visibility();
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => match self.state.focus {
                // Done on the username field advances to the password field
                LoginFocus::Username => self.state.focus = LoginFocus::Password,
                LoginFocus::Password | LoginFocus::Submit => self.submit().await,
            },
            KeyCode::Char(c) => {
                if let Some(field) = self.state.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }

        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        let x_offset = ui::content_x_offset(width);
        let content_width = ui::content_width(width);

        // Ignore clicks outside the content column
        if mouse.column < x_offset || mouse.column >= x_offset + content_width {
            return Ok(());
        }
        let column = mouse.column - x_offset;
        let row = mouse.row;
        let rtl = self.state.form.layout_direction().is_rtl();

        if UiArea::Header.contains_row(row) {
            // The language toggle occupies the trailing half of the header
            let on_toggle = if rtl {
                column < content_width / 2
            } else {
                column >= content_width / 2
            };
            if on_toggle {
                self.toggle_locale();
            }
        } else if UiArea::UsernameField.contains_row(row) {
            self.state.focus = LoginFocus::Username;
        } else if UiArea::PasswordField.contains_row(row) {
            // Clicks near the trailing edge hit the show/hide affordance
            let on_toggle = if rtl {
                column < VISIBILITY_ZONE_WIDTH
            } else {
                column >= content_width.saturating_sub(VISIBILITY_ZONE_WIDTH)
            };
            if on_toggle {
                self.toggle_password_visibility();
            } else {
                self.state.focus = LoginFocus::Password;
            }
        } else if UiArea::LoginButton.contains_row(row) {
            self.state.focus = LoginFocus::Submit;
            self.submit().await;
        }
        Ok(())
    }

    fn toggle_locale(&mut self) {
        self.state.form.toggle_locale();
        self.state.press_button(PressedButton::LanguageToggle);
        tracing::debug!(locale = self.state.form.locale().code(), "language toggled");
    }

    fn toggle_password_visibility(&mut self) {
        self.state.form.toggle_password_visibility();
        self.state.press_button(PressedButton::VisibilityToggle);
    }

    /// Activate the login button.
    ///
    /// Silently does nothing while the button is disabled; otherwise hands
    /// the entered credentials to the host-supplied handler.
    async fn submit(&mut self) {
        if !self.state.form.login_enabled() {
            tracing::debug!("login ignored: button disabled");
            return;
        }

        self.state.press_button(PressedButton::Login);

        let username = self.state.form.username.as_text().to_string();
        let password = self.state.form.password.as_text().to_string();
        match self.handler.login(&username, &password).await {
            Ok(()) => tracing::info!(user = %username, "login submitted"),
            Err(err) => {
                tracing::warn!(%err, "login handler failed");
                self.state.push_error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginError, MockLoginHandler, NoopLoginHandler};
    use crate::i18n::LayoutDirection;
    use crossterm::event::KeyModifiers;

    fn english_config() -> TuiConfig {
        TuiConfig {
            default_locale: Some("en".to_string()),
            ..Default::default()
        }
    }

    fn test_app() -> App {
        App::new(&english_config(), Box::new(NoopLoginHandler))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shortcut(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), platform::SHORTCUT_MODIFIER)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn test_config_locale_wins() {
            let config = TuiConfig {
                default_locale: Some("ar".to_string()),
                ..Default::default()
            };
            let app = App::new(&config, Box::new(NoopLoginHandler));
            assert_eq!(app.state.form.locale(), Locale::Ar);
        }

        #[test]
        fn test_unknown_config_locale_falls_back() {
            let config = TuiConfig {
                default_locale: Some("xx".to_string()),
                ..Default::default()
            };
            let app = App::new(&config, Box::new(NoopLoginHandler));
            assert_eq!(app.state.form.locale(), Locale::system_default());
        }

        #[test]
        fn test_shortcuts_shown_by_default() {
            let app = test_app();
            assert!(app.state.show_shortcuts);
        }

        #[test]
        fn test_shortcuts_hidden_by_config() {
            let config = TuiConfig {
                show_shortcuts: Some(false),
                ..english_config()
            };
            let app = App::new(&config, Box::new(NoopLoginHandler));
            assert!(!app.state.show_shortcuts);
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_tab_cycles_focus() {
            let mut app = test_app();
            assert_eq!(app.state.focus, LoginFocus::Username);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, LoginFocus::Password);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, LoginFocus::Submit);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, LoginFocus::Username);
        }

        #[tokio::test]
        async fn test_back_tab_cycles_backward() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.focus, LoginFocus::Submit);
        }

        #[tokio::test]
        async fn test_enter_on_username_advances_to_password() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.focus, LoginFocus::Password);
        }

        #[tokio::test]
        async fn test_esc_quits() {
            let mut app = test_app();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod text_input {
        use super::*;

        #[tokio::test]
        async fn test_typing_fills_the_focused_field() {
            let mut app = test_app();
            type_str(&mut app, "alice").await;
            assert_eq!(app.state.form.username.as_text(), "alice");
            assert_eq!(app.state.form.password.as_text(), "");

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;
            assert_eq!(app.state.form.password.as_text(), "secret");
        }

        #[tokio::test]
        async fn test_backspace_edits_the_focused_field() {
            let mut app = test_app();
            type_str(&mut app, "ab").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.username.as_text(), "a");
        }

        #[tokio::test]
        async fn test_typing_on_the_button_is_ignored() {
            let mut app = test_app();
            app.state.focus = LoginFocus::Submit;
            type_str(&mut app, "x").await;
            assert_eq!(app.state.form.username.as_text(), "");
            assert_eq!(app.state.form.password.as_text(), "");
        }

        #[tokio::test]
        async fn test_arabic_input() {
            let mut app = test_app();
            type_str(&mut app, "سمير").await;
            assert_eq!(app.state.form.username.as_text(), "سمير");
        }
    }

    mod toggles {
        use super::*;

        #[tokio::test]
        async fn test_language_shortcut_toggles_locale() {
            let mut app = test_app();
            app.handle_key(shortcut('l')).await.unwrap();
            assert_eq!(app.state.form.locale(), Locale::Ar);
            assert_eq!(app.state.form.layout_direction(), LayoutDirection::Rtl);

            app.handle_key(shortcut('l')).await.unwrap();
            assert_eq!(app.state.form.locale(), Locale::En);
            assert_eq!(app.state.form.layout_direction(), LayoutDirection::Ltr);
        }

        #[tokio::test]
        async fn test_visibility_shortcut_toggles_masking_only() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;

            app.handle_key(shortcut('p')).await.unwrap();
            assert!(app.state.form.password_visible);
            assert_eq!(app.state.form.password.as_text(), "secret");

            app.handle_key(shortcut('p')).await.unwrap();
            assert!(!app.state.form.password_visible);
            assert_eq!(app.state.form.password.as_text(), "secret");
        }

        #[tokio::test]
        async fn test_toggle_starts_a_press_flash() {
            let mut app = test_app();
            app.handle_key(shortcut('l')).await.unwrap();
            assert!(app.state.has_active_press());
        }

        #[tokio::test]
        async fn test_shortcut_char_is_not_typed_into_the_field() {
            let mut app = test_app();
            app.handle_key(shortcut('l')).await.unwrap();
            assert_eq!(app.state.form.username.as_text(), "");
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn test_submit_is_a_noop_while_disabled() {
            let mut mock = MockLoginHandler::new();
            mock.expect_login().times(0);
            let mut app = App::new(&english_config(), Box::new(mock));

            type_str(&mut app, "alice").await; // password still empty
            app.state.focus = LoginFocus::Submit;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            // Mock verifies on drop that login was never called
        }

        #[tokio::test]
        async fn test_submit_hands_credentials_to_the_handler() {
            let mut mock = MockLoginHandler::new();
            mock.expect_login()
                .times(1)
                .withf(|username, password| username == "alice" && password == "secret")
                .returning(|_, _| Ok(()));
            let mut app = App::new(&english_config(), Box::new(mock));

            type_str(&mut app, "alice").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
        }

        #[tokio::test]
        async fn test_handler_error_lands_in_the_status_bar() {
            let mut mock = MockLoginHandler::new();
            mock.expect_login()
                .times(1)
                .returning(|_, _| Err(LoginError::Unavailable));
            let mut app = App::new(&english_config(), Box::new(mock));

            type_str(&mut app, "alice").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.last_error(), Some("login service unavailable"));
        }

        #[tokio::test]
        async fn test_successful_submit_flashes_the_button() {
            let mut app = test_app();
            type_str(&mut app, "alice").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(matches!(
                app.state.button_press.as_ref().map(|p| p.button),
                Some(PressedButton::Login)
            ));
        }
    }

    mod mouse {
        use super::*;

        /// 80-column terminal: content column spans columns 14..66
        fn sized_app() -> App {
            let mut app = test_app();
            app.terminal_size = Some((24, 80));
            app
        }

        #[tokio::test]
        async fn test_click_focuses_fields() {
            let mut app = sized_app();
            app.handle_mouse(click(20, UiArea::PasswordField.start_y()))
                .await
                .unwrap();
            assert_eq!(app.state.focus, LoginFocus::Password);

            app.handle_mouse(click(20, UiArea::UsernameField.start_y()))
                .await
                .unwrap();
            assert_eq!(app.state.focus, LoginFocus::Username);
        }

        #[tokio::test]
        async fn test_click_outside_the_content_column_is_ignored() {
            let mut app = sized_app();
            app.handle_mouse(click(2, UiArea::UsernameField.start_y() + 4))
                .await
                .unwrap();
            assert_eq!(app.state.focus, LoginFocus::Username);
        }

        #[tokio::test]
        async fn test_click_on_trailing_header_half_toggles_language() {
            let mut app = sized_app();
            // Column 60 is in the right (trailing) half under LTR
            app.handle_mouse(click(60, UiArea::Header.start_y()))
                .await
                .unwrap();
            assert_eq!(app.state.form.locale(), Locale::Ar);
        }

        #[tokio::test]
        async fn test_header_toggle_zone_mirrors_under_rtl() {
            let mut app = sized_app();
            app.handle_key(shortcut('l')).await.unwrap(); // now Arabic / RTL

            // The right side is now the wordmark, not the toggle
            app.handle_mouse(click(60, UiArea::Header.start_y()))
                .await
                .unwrap();
            assert_eq!(app.state.form.locale(), Locale::Ar);

            // The left (trailing) side toggles back to English
            app.handle_mouse(click(20, UiArea::Header.start_y()))
                .await
                .unwrap();
            assert_eq!(app.state.form.locale(), Locale::En);
        }

        #[tokio::test]
        async fn test_click_on_trailing_password_edge_toggles_visibility() {
            let mut app = sized_app();
            // Columns 56..66 are the show/hide zone under LTR
            app.handle_mouse(click(60, UiArea::PasswordField.start_y() + 1))
                .await
                .unwrap();
            assert!(app.state.form.password_visible);
            assert_eq!(app.state.focus, LoginFocus::Username); // focus unchanged
        }

        #[tokio::test]
        async fn test_visibility_zone_mirrors_under_rtl() {
            let mut app = sized_app();
            app.handle_key(shortcut('l')).await.unwrap(); // now Arabic / RTL

            // Trailing edge is now on the left: columns 14..24
            app.handle_mouse(click(16, UiArea::PasswordField.start_y() + 1))
                .await
                .unwrap();
            assert!(app.state.form.password_visible);
        }

        #[tokio::test]
        async fn test_click_on_disabled_button_does_nothing() {
            let mut mock = MockLoginHandler::new();
            mock.expect_login().times(0);
            let mut app = App::new(&english_config(), Box::new(mock));
            app.terminal_size = Some((24, 80));

            app.handle_mouse(click(30, UiArea::LoginButton.start_y() + 1))
                .await
                .unwrap();
            assert_eq!(app.state.focus, LoginFocus::Submit);
        }

        #[tokio::test]
        async fn test_click_on_enabled_button_submits() {
            let mut mock = MockLoginHandler::new();
            mock.expect_login().times(1).returning(|_, _| Ok(()));
            let mut app = App::new(&english_config(), Box::new(mock));
            app.terminal_size = Some((24, 80));

            type_str(&mut app, "alice").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(&mut app, "secret").await;

            app.handle_mouse(click(30, UiArea::LoginButton.start_y() + 1))
                .await
                .unwrap();
        }
    }
}
