//! Outbound message composition.
//!
//! `MessageComposer::compose` is a pure function of the message kind and the
//! locale. The only inputs it carries are the two external link targets, which
//! come from configuration.

use crate::i18n::{
    Locale, LocaleCatalog, APP_TITLE, HELP_TEXT, LANGUAGE_MENU_HEADER, LANGUAGE_MENU_SUBTITLE,
};

/// The responses the bot knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Welcome,
    LanguageSelected,
    LanguageMenu,
    Help,
}

/// How a card button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled, brand colour
    Primary,
    /// Text-only link
    Link,
}

/// A button that opens a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    pub label: String,
    pub uri: String,
    pub style: ButtonStyle,
}

/// Structured card: header, body paragraph, and footer buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Shown in notifications and on clients that cannot render cards
    pub alt_text: String,
    pub header: String,
    pub body: String,
    /// Center header and body (used by the language picker)
    pub centered: bool,
    pub buttons: Vec<CardButton>,
}

/// A message ready to be pushed to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text(String),
    Card(Card),
}

impl OutboundMessage {
    /// All human-readable text in the message, one part per line.
    pub fn text_content(&self) -> String {
        match self {
            OutboundMessage::Text(text) => text.clone(),
            OutboundMessage::Card(card) => {
                let mut parts = vec![card.header.as_str(), card.body.as_str()];
                parts.extend(card.buttons.iter().map(|b| b.label.as_str()));
                parts.join("\n")
            }
        }
    }
}

/// External pages the cards link to.
#[derive(Debug, Clone)]
pub struct LinkTargets {
    /// Opened by the welcome card's button
    pub language_selection_url: String,
    /// Base URI of the language picker; each button appends `?lang=<code>`
    pub language_menu_base_url: String,
}

/// Builds localized outbound messages.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    links: LinkTargets,
}

impl MessageComposer {
    pub fn new(links: LinkTargets) -> Self {
        Self { links }
    }

    /// Build the message of the given kind in the given locale.
    pub fn compose(&self, kind: MessageKind, locale: Locale) -> OutboundMessage {
        match kind {
            MessageKind::Welcome => self.welcome(locale),
            MessageKind::LanguageSelected => language_selected(locale),
            MessageKind::LanguageMenu => self.language_menu(),
            MessageKind::Help => help(),
        }
    }

    fn welcome(&self, locale: Locale) -> OutboundMessage {
        let strings = &locale.config().strings;
        OutboundMessage::Card(Card {
            alt_text: format!("歡迎使用{}", APP_TITLE),
            header: APP_TITLE.to_string(),
            body: strings.welcome.to_string(),
            centered: false,
            buttons: vec![CardButton {
                label: strings.select_language.to_string(),
                uri: self.links.language_selection_url.clone(),
                style: ButtonStyle::Primary,
            }],
        })
    }

    fn language_menu(&self) -> OutboundMessage {
        let base = self.links.language_menu_base_url.trim_end_matches('/');
        let buttons = LocaleCatalog::get()
            .list_all()
            .iter()
            .map(|entry| CardButton {
                label: entry.display_name.to_string(),
                uri: format!("{}?lang={}", base, entry.locale.code()),
                style: ButtonStyle::Link,
            })
            .collect();

        OutboundMessage::Card(Card {
            alt_text: "選擇語言".to_string(),
            header: LANGUAGE_MENU_HEADER.to_string(),
            body: LANGUAGE_MENU_SUBTITLE.to_string(),
            centered: true,
            buttons,
        })
    }
}

fn language_selected(locale: Locale) -> OutboundMessage {
    let config = locale.config();
    let body = config
        .strings
        .language_set_body
        .replace("{language}", config.display_name)
        .replace("{start}", config.strings.start_ordering);

    OutboundMessage::Card(Card {
        alt_text: config.strings.language_set_title.to_string(),
        header: config.strings.language_set_title.to_string(),
        body,
        centered: false,
        buttons: Vec::new(),
    })
}

fn help() -> OutboundMessage {
    let languages = LocaleCatalog::get()
        .list_all()
        .iter()
        .map(|entry| format!("• {}", entry.annotated_name))
        .collect::<Vec<_>>()
        .join("\n");

    OutboundMessage::Text(HELP_TEXT.replace("{languages}", &languages))
}
