//! In-memory user locale preferences.
//!
//! Preferences live for the lifetime of the process. The map is never exposed;
//! callers only `get` and `set`.

use crate::i18n::Locale;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Process-wide mapping from LINE user id to selected locale.
#[derive(Debug, Default)]
pub struct UserLocaleStore {
    preferences: RwLock<HashMap<String, Locale>>,
}

impl UserLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a user's locale, or the default (zh-TW) if they never picked one.
    pub fn get(&self, user_id: &str) -> Locale {
        // A poisoned lock still holds a consistent map: writers only insert.
        let preferences = self.preferences.read().unwrap_or_else(|e| e.into_inner());
        preferences.get(user_id).copied().unwrap_or_default()
    }

    /// Store a user's locale. Last write wins.
    pub fn set(&self, user_id: &str, locale: Locale) {
        let mut preferences = self.preferences.write().unwrap_or_else(|e| e.into_inner());
        let previous = preferences.insert(user_id.to_string(), locale);
        debug!(
            "Locale for {} changed: {:?} -> {}",
            user_id,
            previous.map(|l| l.code()),
            locale
        );
    }

    /// Number of users with a stored preference.
    pub fn len(&self) -> usize {
        self.preferences
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
