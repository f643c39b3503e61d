//! LIFF (LINE Front-end Framework) app ids.
//!
//! When a LIFF id is configured, the welcome card opens the LIFF app instead of
//! the plain language-selection page.

use anyhow::{bail, Result};
use regex::Regex;
use std::sync::OnceLock;

static LIFF_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    LIFF_ID_PATTERN.get_or_init(|| Regex::new(r"^\d{10}-[a-z0-9]{8}$").expect("valid LIFF id regex"))
}

/// Check that `id` looks like `1234567890-abcdefgh`.
pub fn is_valid_liff_id(id: &str) -> bool {
    pattern().is_match(id)
}

/// URL that opens the LIFF app inside LINE.
pub fn liff_url(id: &str) -> Result<String> {
    if !is_valid_liff_id(id) {
        bail!(
            "Invalid LIFF ID '{}'. Expected format: 1234567890-abcdefgh",
            id
        );
    }
    Ok(format!("https://liff.line.me/{}", id))
}
