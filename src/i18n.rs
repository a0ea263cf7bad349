//! Internationalization (i18n) module
//!
//! Picks the UI language from the system locale. Supports English and
//! Chinese Simplified; strings live in `locales/*.yml`.
//! Note: Log messages remain in English for consistency.

use std::sync::OnceLock;
use tracing::debug;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    ChineseSimplified,
}

impl Language {
    /// Locale code used by the translation tables
    pub fn locale_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    /// Map a BCP 47 tag such as `zh-Hans-CN` or `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.starts_with("zh") || tag.contains("hans") || tag.contains("chinese") {
            Language::ChineseSimplified
        } else {
            Language::English
        }
    }
}

static LANGUAGE: OnceLock<Language> = OnceLock::new();

/// Current UI language, detected on first use
pub fn get_language() -> Language {
    *LANGUAGE.get_or_init(detect_language)
}

fn detect_language() -> Language {
    sys_locale::get_locale()
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or(Language::English)
}

/// Detect the system language and select its translation table
pub fn init_locale() -> Language {
    let language = get_language();
    rust_i18n::set_locale(language.locale_code());
    debug!(locale = language.locale_code(), "Locale initialized");
    language
}
