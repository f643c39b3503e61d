use crate::composer::LinkTargets;
use crate::liff;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // LINE channel
    pub line_channel_access_token: String,
    pub line_channel_secret: String,
    pub line_api_base_url: String,

    // Links opened from cards
    pub language_selection_url: String,
    pub language_menu_base_url: String,
    pub liff_id: Option<String>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let liff_id = std::env::var("LIFF_ID").ok().filter(|v| !v.is_empty());
        if let Some(id) = &liff_id {
            liff::liff_url(id).context("LIFF_ID is set but invalid")?;
        }

        Ok(Self {
            // LINE channel
            line_channel_access_token: std::env::var("LINE_CHANNEL_ACCESS_TOKEN")
                .context("LINE_CHANNEL_ACCESS_TOKEN not set")?,
            line_channel_secret: std::env::var("LINE_CHANNEL_SECRET")
                .context("LINE_CHANNEL_SECRET not set")?,
            line_api_base_url: std::env::var("LINE_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.line.me".to_string()),

            // Links
            language_selection_url: std::env::var("LANGUAGE_SELECTION_URL").unwrap_or_else(|_| {
                "https://your-static-app.azurestaticapps.net/language-selection".to_string()
            }),
            language_menu_base_url: std::env::var("LANGUAGE_MENU_BASE_URL")
                .unwrap_or_else(|_| "https://your-static-app.azurestaticapps.net".to_string()),
            liff_id,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        })
    }

    /// Link targets for the message composer.
    ///
    /// A valid LIFF id takes precedence over `language_selection_url`.
    pub fn link_targets(&self) -> LinkTargets {
        let language_selection_url = self
            .liff_id
            .as_deref()
            .and_then(|id| liff::liff_url(id).ok())
            .unwrap_or_else(|| self.language_selection_url.clone());

        LinkTargets {
            language_selection_url,
            language_menu_base_url: self.language_menu_base_url.clone(),
        }
    }
}
