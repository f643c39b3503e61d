//! Command routing: turns one inbound event into at most one reply.
//!
//! Every event goes through a single classification step, so an event can
//! never be answered twice. The only state consulted is the user locale store.

use crate::composer::{MessageComposer, MessageKind, OutboundMessage};
use crate::i18n::Locale;
use crate::line::SourceKind;
use crate::store::UserLocaleStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lower-cased phrases that ask for the help text
const HELP_SYNONYMS: &[&str] = &["help", "幫助", "ヘルプ", "도움말"];

/// Lower-cased phrases that ask for the language picker
const LANGUAGE_SYNONYMS: &[&str] = &[
    "language",
    "change language",
    "語言",
    "語言設定",
    "言語",
    "언어",
];

/// Webhook event type, as far as routing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Message,
    Follow,
    Join,
    Unfollow,
    Leave,
    Other,
}

impl EventKind {
    /// Map the webhook `type` field.
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "message" => EventKind::Message,
            "follow" => EventKind::Follow,
            "join" | "memberJoined" => EventKind::Join,
            "unfollow" => EventKind::Unfollow,
            "leave" | "memberLeft" => EventKind::Leave,
            _ => EventKind::Other,
        }
    }

    /// The user can no longer receive pushes after these events.
    fn ends_conversation(&self) -> bool {
        matches!(self, EventKind::Unfollow | EventKind::Leave)
    }
}

/// One webhook event, reduced to what the router needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub kind: EventKind,
    pub user_id: Option<String>,
    /// Present only for text messages
    pub text: Option<String>,
    pub source_kind: SourceKind,
}

/// What a piece of inbound text asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectLocale(Locale),
    Help,
    LanguageMenu,
    Welcome,
}

/// Classify inbound text. Anything unrecognized is `Welcome`.
pub fn classify(text: &str) -> Command {
    if let Some(locale) = Locale::from_display_name(text) {
        return Command::SelectLocale(locale);
    }

    let normalized = text.trim().to_lowercase();
    if HELP_SYNONYMS.contains(&normalized.as_str()) {
        Command::Help
    } else if LANGUAGE_SYNONYMS.contains(&normalized.as_str()) {
        Command::LanguageMenu
    } else {
        Command::Welcome
    }
}

/// A composed message addressed to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub user_id: String,
    pub message: OutboundMessage,
}

/// Routes events to handlers and composes the replies.
pub struct Dispatcher {
    store: Arc<UserLocaleStore>,
    composer: MessageComposer,
}

impl Dispatcher {
    pub fn new(store: Arc<UserLocaleStore>, composer: MessageComposer) -> Self {
        Self { store, composer }
    }

    pub fn store(&self) -> &UserLocaleStore {
        &self.store
    }

    /// Handle one event and return the reply to push, if any.
    ///
    /// Events without a user id and events after which the user is unreachable
    /// get no reply.
    pub fn dispatch(&self, event: InboundEvent) -> Option<Reply> {
        if event.kind.ends_conversation() {
            debug!("Ignoring {:?} event", event.kind);
            return None;
        }

        let Some(user_id) = event.user_id else {
            warn!(
                "Skipping {:?} event from {:?} source without a user id",
                event.kind, event.source_kind
            );
            return None;
        };

        let command = match event.text.as_deref() {
            Some(text) => classify(text),
            None => Command::Welcome,
        };
        info!("Received {:?} event from {}: {:?}", event.kind, user_id, command);

        let message = self.handle(&user_id, command);
        Some(Reply { user_id, message })
    }

    fn handle(&self, user_id: &str, command: Command) -> OutboundMessage {
        match command {
            Command::SelectLocale(locale) => {
                self.store.set(user_id, locale);
                info!("User {} selected locale {}", user_id, locale);
                self.composer.compose(MessageKind::LanguageSelected, locale)
            }
            Command::Help => {
                let locale = self.store.get(user_id);
                self.composer.compose(MessageKind::Help, locale)
            }
            Command::LanguageMenu => {
                // The picker lists every locale, whatever the current one is
                self.composer
                    .compose(MessageKind::LanguageMenu, Locale::default())
            }
            Command::Welcome => {
                let locale = self.store.get(user_id);
                self.composer.compose(MessageKind::Welcome, locale)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::LinkTargets;
    use proptest::prelude::*;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            Arc::new(UserLocaleStore::new()),
            MessageComposer::new(LinkTargets {
                language_selection_url: "https://example.test/language-selection".to_string(),
                language_menu_base_url: "https://example.test".to_string(),
            }),
        )
    }

    fn text_event(user_id: &str, text: &str) -> InboundEvent {
        InboundEvent {
            kind: EventKind::Message,
            user_id: Some(user_id.to_string()),
            text: Some(text.to_string()),
            source_kind: SourceKind::User,
        }
    }

    fn compose(d: &Dispatcher, kind: MessageKind, locale: Locale) -> OutboundMessage {
        d.composer.compose(kind, locale)
    }

    // ==================== Classification Tests ====================

    #[test]
    fn test_classify_display_names() {
        assert_eq!(classify("中文"), Command::SelectLocale(Locale::ZhTw));
        assert_eq!(classify("English"), Command::SelectLocale(Locale::EnUs));
        assert_eq!(classify("english"), Command::SelectLocale(Locale::EnUs));
        assert_eq!(classify("日本語"), Command::SelectLocale(Locale::JaJp));
        assert_eq!(classify(" 한국어 "), Command::SelectLocale(Locale::KoKr));
    }

    #[test]
    fn test_classify_help_synonyms() {
        for text in ["help", "HELP", "Help", "幫助", "ヘルプ", "도움말"] {
            assert_eq!(classify(text), Command::Help, "{}", text);
        }
    }

    #[test]
    fn test_classify_language_synonyms() {
        for text in ["language", "Language", "Change Language", "語言", "語言設定", "言語", "언어"] {
            assert_eq!(classify(text), Command::LanguageMenu, "{}", text);
        }
    }

    #[test]
    fn test_classify_fallbacks() {
        for text in ["", "   ", "asdf1234", "🍜🍜", "help me", "開始點餐"] {
            assert_eq!(classify(text), Command::Welcome, "{:?}", text);
        }
    }

    proptest! {
        #[test]
        fn test_classify_ascii_alphanumeric_noise_is_welcome(text in "[a-z0-9]{9,20}") {
            prop_assert_eq!(classify(&text), Command::Welcome);
        }
    }

    // ==================== Event Kind Tests ====================

    #[test]
    fn test_event_kind_from_wire() {
        assert_eq!(EventKind::from_wire("message"), EventKind::Message);
        assert_eq!(EventKind::from_wire("follow"), EventKind::Follow);
        assert_eq!(EventKind::from_wire("join"), EventKind::Join);
        assert_eq!(EventKind::from_wire("unfollow"), EventKind::Unfollow);
        assert_eq!(EventKind::from_wire("leave"), EventKind::Leave);
        assert_eq!(EventKind::from_wire("postback"), EventKind::Other);
        assert_eq!(EventKind::from_wire(""), EventKind::Other);
    }

    // ==================== Dispatch Tests ====================

    #[test]
    fn test_select_locale_updates_store_and_confirms() {
        let d = dispatcher();
        for locale in Locale::ALL {
            let reply = d
                .dispatch(text_event("U1", locale.display_name()))
                .expect("should reply");
            assert_eq!(reply.user_id, "U1");
            assert_eq!(d.store().get("U1"), locale);
            assert!(reply.message.text_content().contains(locale.display_name()));
            assert_eq!(
                reply.message,
                compose(&d, MessageKind::LanguageSelected, locale)
            );
        }
    }

    #[test]
    fn test_select_same_locale_twice_is_idempotent() {
        let d = dispatcher();
        let first = d.dispatch(text_event("U1", "日本語")).unwrap();
        let second = d.dispatch(text_event("U1", "日本語")).unwrap();
        assert_eq!(first, second);
        assert_eq!(d.store().get("U1"), Locale::JaJp);
        assert_eq!(d.store().len(), 1);
    }

    #[test]
    fn test_help_regardless_of_stored_locale() {
        let d = dispatcher();
        let expected = compose(&d, MessageKind::Help, Locale::ZhTw);
        for text in ["help", "幫助", "ヘルプ", "도움말"] {
            assert_eq!(d.dispatch(text_event("U1", text)).unwrap().message, expected);
        }
        d.store.set("U1", Locale::KoKr);
        assert_eq!(d.dispatch(text_event("U1", "help")).unwrap().message, expected);
    }

    #[test]
    fn test_language_menu_does_not_touch_store() {
        let d = dispatcher();
        let reply = d.dispatch(text_event("U1", "language")).unwrap();
        assert_eq!(
            reply.message,
            compose(&d, MessageKind::LanguageMenu, Locale::ZhTw)
        );
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_unrecognized_text_gets_welcome_without_mutation() {
        let d = dispatcher();
        for text in ["asdf1234", "", "🎉"] {
            let reply = d.dispatch(text_event("U9", text)).unwrap();
            assert_eq!(
                reply.message,
                compose(&d, MessageKind::Welcome, Locale::ZhTw)
            );
        }
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_welcome_uses_stored_locale() {
        let d = dispatcher();
        d.dispatch(text_event("U1", "English"));
        let reply = d.dispatch(text_event("U1", "hello")).unwrap();
        assert_eq!(
            reply.message,
            compose(&d, MessageKind::Welcome, Locale::EnUs)
        );
    }

    #[test]
    fn test_follow_and_join_get_single_welcome() {
        let d = dispatcher();
        for kind in [EventKind::Follow, EventKind::Join, EventKind::Other] {
            let event = InboundEvent {
                kind,
                user_id: Some("U1".to_string()),
                text: None,
                source_kind: SourceKind::User,
            };
            let reply = d.dispatch(event).expect("should reply");
            assert_eq!(
                reply.message,
                compose(&d, MessageKind::Welcome, Locale::ZhTw)
            );
        }
    }

    #[test]
    fn test_non_text_message_falls_back_to_welcome() {
        let d = dispatcher();
        let event = InboundEvent {
            kind: EventKind::Message,
            user_id: Some("U1".to_string()),
            text: None,
            source_kind: SourceKind::Unknown,
        };
        assert_eq!(
            d.dispatch(event).unwrap().message,
            compose(&d, MessageKind::Welcome, Locale::ZhTw)
        );
    }

    #[test]
    fn test_unfollow_and_leave_are_ignored() {
        let d = dispatcher();
        for kind in [EventKind::Unfollow, EventKind::Leave] {
            let event = InboundEvent {
                kind,
                user_id: Some("U1".to_string()),
                text: None,
                source_kind: SourceKind::User,
            };
            assert!(d.dispatch(event).is_none());
        }
    }

    #[test]
    fn test_event_without_user_is_skipped() {
        let d = dispatcher();
        let event = InboundEvent {
            kind: EventKind::Join,
            user_id: None,
            text: None,
            source_kind: SourceKind::Group,
        };
        assert!(d.dispatch(event).is_none());
    }
}
