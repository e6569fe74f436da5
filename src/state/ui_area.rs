//! UI area positioning for mouse event handling
//!
//! The login screen has a fixed vertical layout, so each interactive region
//! can be located by a constant row range. Columns are handled separately in
//! the app layer because the content column is horizontally centered and the
//! header/password hit zones mirror under RTL.
//!
//! # Layout
//!
//! ```text
//! Row 0:      top margin
//! Row 1:      Header (wordmark + language toggle)
//! Row 2:      gap
//! Rows 3-5:   Username field (bordered)
//! Row 6:      gap
//! Rows 7-9:   Password field (bordered, with show/hide zone)
//! Row 10:     Forgot-credentials link
//! Row 11:     gap
//! Rows 12-14: Login button
//! Row 15:     Help / contact line
//! Row 16:     gap
//! Row 17:     Divider
//! Rows 18-23: Promo shortcut row
//! Bottom:     Status bar (1 row)
//! ```

/// Height of a bordered field or button (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Height of the promo shortcut row (icon line + wrapped caption)
pub const SHORTCUTS_HEIGHT: u16 = 6;

/// Interactive region of the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Header row with the wordmark and the language toggle
    Header,
    UsernameField,
    PasswordField,
    ForgotLink,
    LoginButton,
    HelpLine,
    Shortcuts,
}

impl UiArea {
    /// Starting row of this region (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 1,
            UiArea::UsernameField => 3,
            UiArea::PasswordField => 7,
            UiArea::ForgotLink => 10,
            UiArea::LoginButton => 12,
            UiArea::HelpLine => 15,
            UiArea::Shortcuts => 18,
        }
    }

    /// Number of rows this region spans
    #[inline]
    pub const fn height(self) -> u16 {
        match self {
            UiArea::Header => 1,
            UiArea::UsernameField => FIELD_HEIGHT,
            UiArea::PasswordField => FIELD_HEIGHT,
            UiArea::ForgotLink => 1,
            UiArea::LoginButton => FIELD_HEIGHT,
            UiArea::HelpLine => 1,
            UiArea::Shortcuts => SHORTCUTS_HEIGHT,
        }
    }

    /// Check whether a mouse row falls inside this region
    #[inline]
    pub const fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y() && mouse_row < self.start_y() + self.height()
    }
}
