//! Localization catalog for the login screen
//!
//! The catalog is embedded: every message key resolves to static English and
//! Arabic text. Application state only ever selects the locale; text lookup
//! happens at render time.

use serde::{Deserialize, Serialize};

/// Supported locales
///
/// Two-state by design: the language toggle only ever switches between
/// English and Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Switch to the other locale
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a language code ("en" / "ar")
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Layout direction for this locale
    pub fn layout_direction(&self) -> LayoutDirection {
        match self {
            Self::En => LayoutDirection::Ltr,
            Self::Ar => LayoutDirection::Rtl,
        }
    }

    /// Locale from the process environment (`LC_ALL` wins over `LANG`).
    ///
    /// Anything that is not an Arabic tag falls back to English.
    pub fn system_default() -> Self {
        std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .map(|tag| Self::from_env_tag(&tag))
            .unwrap_or_default()
    }

    /// Map an environment locale tag (e.g. "ar_EG.UTF-8") to a locale
    pub fn from_env_tag(tag: &str) -> Self {
        if tag.starts_with("ar") {
            Self::Ar
        } else {
            Self::En
        }
    }
}

/// Layout direction, derived from the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Keys for every localized string on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// Bank wordmark in the header
    BankName,
    /// Header label that switches to the other language
    LanguageToggle,
    Username,
    Password,
    ShowPassword,
    HidePassword,
    ForgotCredentials,
    Login,
    Help,
    ContactUs,
    Products,
    ExchangeRate,
    SecurityTips,
    NearestBranch,
}

#[allow(dead_code)]
impl MessageKey {
    /// All keys, for catalog completeness checks
    pub fn all() -> &'static [MessageKey] {
        &[
            Self::BankName,
            Self::LanguageToggle,
            Self::Username,
            Self::Password,
            Self::ShowPassword,
            Self::HidePassword,
            Self::ForgotCredentials,
            Self::Login,
            Self::Help,
            Self::ContactUs,
            Self::Products,
            Self::ExchangeRate,
            Self::SecurityTips,
            Self::NearestBranch,
        ]
    }
}

/// Resolve a message key against the catalog for the given locale.
///
/// The language toggle label names the language the toggle switches TO,
/// matching the original screen ("العربية" while in English, and vice versa).
pub fn text(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => match key {
            MessageKey::BankName => "BANQUE MISR",
            MessageKey::LanguageToggle => "العربية",
            MessageKey::Username => "Username",
            MessageKey::Password => "Password",
            MessageKey::ShowPassword => "show",
            MessageKey::HidePassword => "hide",
            MessageKey::ForgotCredentials => "Forgot Username/Password?",
            MessageKey::Login => "Login",
            MessageKey::Help => "Need help? ",
            MessageKey::ContactUs => "Contact us",
            MessageKey::Products => "Our products",
            MessageKey::ExchangeRate => "Exchange rate",
            MessageKey::SecurityTips => "Security tips",
            MessageKey::NearestBranch => "Nearest branch or ATM",
        },
        Locale::Ar => match key {
            MessageKey::BankName => "بنك مصر",
            MessageKey::LanguageToggle => "English",
            MessageKey::Username => "اسم المستخدم",
            MessageKey::Password => "كلمة المرور",
            MessageKey::ShowPassword => "إظهار",
            MessageKey::HidePassword => "إخفاء",
            MessageKey::ForgotCredentials => "هل نسيت اسم المستخدم/كلمة المرور؟",
            MessageKey::Login => "تسجيل الدخول",
            MessageKey::Help => "تحتاج مساعدة؟ ",
            MessageKey::ContactUs => "تواصل معنا",
            MessageKey::Products => "منتجاتنا",
            MessageKey::ExchangeRate => "سعر الصرف",
            MessageKey::SecurityTips => "نصائح أمنية",
            MessageKey::NearestBranch => "أقرب فرع أو ماكينة صراف",
        },
    }
}
