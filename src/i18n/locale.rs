//! Locale type: the four interface languages the bot speaks.
//!
//! `Locale` is a closed enum, so every value that reaches the user locale
//! store is guaranteed to have an entry in the catalog.

use crate::i18n::{LocaleCatalog, LocaleConfig};

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Traditional Chinese (default)
    #[default]
    ZhTw,
    /// English
    EnUs,
    /// Japanese
    JaJp,
    /// Korean
    KoKr,
}

impl Locale {
    /// All locales in catalog order.
    pub const ALL: [Locale; 4] = [Locale::ZhTw, Locale::EnUs, Locale::JaJp, Locale::KoKr];

    /// Match user-typed text against the display names.
    ///
    /// Surrounding whitespace is ignored. Latin names match case-insensitively,
    /// names in other scripts must match exactly.
    pub fn from_display_name(text: &str) -> Option<Locale> {
        let text = text.trim();
        Self::ALL.into_iter().find(|locale| {
            let name = locale.display_name();
            if name.is_ascii() {
                name.eq_ignore_ascii_case(text)
            } else {
                name == text
            }
        })
    }

    /// The locale tag (e.g., "zh-TW").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::EnUs => "en-US",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
        }
    }

    /// The locale's name written in its own script (e.g., "日本語").
    pub fn display_name(&self) -> &'static str {
        self.config().display_name
    }

    /// Full catalog entry for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleCatalog::get().entry(*self)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
