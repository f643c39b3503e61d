//! Internationalization (i18n) module for the four interface languages.
//!
//! # Architecture
//!
//! - `catalog`: Single source of truth for all supported locales and their strings
//! - `locale`: Closed `Locale` enum (zh-TW, en-US, ja-JP, ko-KR)
//! - `strings`: Localized user-facing strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, LocaleCatalog};
//!
//! let english = Locale::from_display_name("English");
//! let entries = LocaleCatalog::get().list_all();
//! ```

mod catalog;
mod locale;
mod strings;

pub use catalog::{LocaleCatalog, LocaleConfig};
pub use locale::Locale;
pub use strings::{
    LocaleStrings, APP_TITLE, HELP_TEXT, LANGUAGE_MENU_HEADER, LANGUAGE_MENU_SUBTITLE,
};
