//! Locale catalog: single source of truth for the supported interface languages.
//!
//! The catalog is built once on first access (`OnceLock`) and is immutable
//! afterwards, so it can be shared freely between concurrent webhook tasks.

use crate::i18n::strings::{
    ENGLISH_STRINGS, JAPANESE_STRINGS, KOREAN_STRINGS, LocaleStrings, TRADITIONAL_CHINESE_STRINGS,
};
use crate::i18n::Locale;
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// Name of the language in its own script; also the text users send to select it
    pub display_name: &'static str,

    /// Name of the language as shown in the help text (e.g., "English (英文)")
    pub annotated_name: &'static str,

    /// Localized user-facing strings
    pub strings: LocaleStrings,
}

/// Global locale catalog singleton.
pub struct LocaleCatalog {
    locales: [LocaleConfig; 4],
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<LocaleCatalog> = OnceLock::new();

impl LocaleCatalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static LocaleCatalog {
        CATALOG.get_or_init(|| LocaleCatalog {
            locales: default_locales(),
        })
    }

    /// Get the entry for a locale. Total over `Locale`.
    pub fn entry(&self, locale: Locale) -> &LocaleConfig {
        let index = match locale {
            Locale::ZhTw => 0,
            Locale::EnUs => 1,
            Locale::JaJp => 2,
            Locale::KoKr => 3,
        };
        &self.locales[index]
    }

    /// All entries in display order.
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }
}

fn default_locales() -> [LocaleConfig; 4] {
    [
        LocaleConfig {
            locale: Locale::ZhTw,
            display_name: "中文",
            annotated_name: "中文 (繁體)",
            strings: TRADITIONAL_CHINESE_STRINGS,
        },
        LocaleConfig {
            locale: Locale::EnUs,
            display_name: "English",
            annotated_name: "English (英文)",
            strings: ENGLISH_STRINGS,
        },
        LocaleConfig {
            locale: Locale::JaJp,
            display_name: "日本語",
            annotated_name: "日本語 (日文)",
            strings: JAPANESE_STRINGS,
        },
        LocaleConfig {
            locale: Locale::KoKr,
            display_name: "한국어",
            annotated_name: "한국어 (韓文)",
            strings: KOREAN_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_get_returns_singleton() {
        let catalog1 = LocaleCatalog::get();
        let catalog2 = LocaleCatalog::get();
        assert!(std::ptr::eq(catalog1, catalog2));
    }

    #[test]
    fn test_entry_matches_requested_locale() {
        let catalog = LocaleCatalog::get();
        for locale in Locale::ALL {
            assert_eq!(catalog.entry(locale).locale, locale);
        }
    }

    #[test]
    fn test_list_all_in_catalog_order() {
        let codes: Vec<_> = LocaleCatalog::get()
            .list_all()
            .iter()
            .map(|entry| entry.locale.code())
            .collect();
        assert_eq!(codes, vec!["zh-TW", "en-US", "ja-JP", "ko-KR"]);
    }

    #[test]
    fn test_display_names_are_unique() {
        let catalog = LocaleCatalog::get();
        let mut names: Vec<_> = catalog.list_all().iter().map(|e| e.display_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_every_entry_has_localized_strings() {
        for entry in LocaleCatalog::get().list_all() {
            assert!(!entry.strings.welcome.is_empty(), "{}", entry.locale);
            assert!(!entry.strings.select_language.is_empty(), "{}", entry.locale);
            assert!(!entry.strings.start_ordering.is_empty(), "{}", entry.locale);
        }
    }
}
