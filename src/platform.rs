//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the toggle shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Language toggle shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const LANGUAGE_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const LANGUAGE_SHORTCUT: &str = "Ctrl+L";

/// Password visibility shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const VISIBILITY_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const VISIBILITY_SHORTCUT: &str = "Ctrl+P";
