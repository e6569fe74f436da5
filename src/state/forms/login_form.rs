//! Login form state and derived presentation flags

use super::field::FormField;
use crate::i18n::{LayoutDirection, Locale, MessageKey};

/// Presentation flags derived from the raw form state.
///
/// Always recomputed from the form via [`LoginForm::derived`]; never stored
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFlags {
    /// The login button is enabled only while both fields are non-empty
    pub login_enabled: bool,
    /// Rtl iff the current locale is Arabic
    pub layout_direction: LayoutDirection,
}

/// Transient state of the login screen.
///
/// Created empty when the screen opens and dropped when it closes; nothing
/// here is persisted. Every mutator touches exactly one attribute.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: FormField,
    pub password: FormField,
    /// Only affects how the password is rendered, never its stored value
    pub password_visible: bool,
    locale: Locale,
}

#[allow(dead_code)]
impl LoginForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            username: FormField::text("username", MessageKey::Username),
            password: FormField::secret("password", MessageKey::Password),
            password_visible: false,
            locale,
        }
    }

    /// Replace the username. Empty strings are valid input.
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username.set_text(value);
    }

    /// Replace the password. Empty strings are valid input.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_text(value);
    }

    /// Flip whether the password renders masked or plain
    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Switch between English and Arabic
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Compute the presentation flags from the current state
    pub fn derived(&self) -> DerivedFlags {
        DerivedFlags {
            login_enabled: !self.username.is_empty() && !self.password.is_empty(),
            layout_direction: self.locale.layout_direction(),
        }
    }

    pub fn login_enabled(&self) -> bool {
        self.derived().login_enabled
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.derived().layout_direction
    }

    /// Password as it should be rendered (masked unless visible)
    pub fn display_password(&self) -> String {
        self.password.display_value(self.password_visible)
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
