//! Application state definitions

use crate::i18n::Locale;
use crate::state::{FormField, LoginForm};
use std::time::{Duration, Instant};

/// How long a button press flash stays on screen
const BUTTON_PRESS_DURATION: Duration = Duration::from_millis(150);

/// Which widget currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginFocus {
    /// Move focus forward (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Username,
        }
    }

    /// Move focus backward (wraps around)
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Username => Self::Submit,
            Self::Password => Self::Username,
            Self::Submit => Self::Password,
        }
    }
}

/// Buttons that flash briefly when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressedButton {
    Login,
    LanguageToggle,
    VisibilityToggle,
}

/// Transient press-flash animation state
#[derive(Debug, Clone)]
pub struct ButtonPressState {
    pub button: PressedButton,
    pressed_at: Instant,
}

impl ButtonPressState {
    pub fn new(button: PressedButton) -> Self {
        Self {
            button,
            pressed_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.pressed_at.elapsed() >= BUTTON_PRESS_DURATION
    }
}

/// Main application state
pub struct AppState {
    /// The login form (the only domain state on this screen)
    pub form: LoginForm,
    pub focus: LoginFocus,
    /// Active press-flash animation, if any
    pub button_press: Option<ButtonPressState>,
    /// Whether the promo shortcut row is rendered
    pub show_shortcuts: bool,
    errors: Vec<String>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            form: LoginForm::new(locale),
            focus: LoginFocus::default(),
            button_press: None,
            show_shortcuts: true,
            errors: Vec::new(),
        }
    }

    /// Push an error message for display in the status bar
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Most recent error, if any
    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }

    /// The form field under focus; `None` while the button has focus
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            LoginFocus::Username => Some(&mut self.form.username),
            LoginFocus::Password => Some(&mut self.form.password),
            LoginFocus::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Start a press flash on the given button
    pub fn press_button(&mut self, button: PressedButton) {
        self.button_press = Some(ButtonPressState::new(button));
    }

    /// True while a press flash wants fast redraws
    pub fn has_active_press(&self) -> bool {
        self.button_press.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
