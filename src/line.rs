//! LINE Messaging API: webhook payloads, flex rendering, and the push client.

use crate::composer::{ButtonStyle, Card, OutboundMessage};
use crate::router::{EventKind, InboundEvent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};

/// Brand colour of titles and primary buttons
const BRAND_COLOR: &str = "#1DB446";
/// Colour of body paragraphs
const BODY_COLOR: &str = "#666666";

// LINE webhook types
/// Events are kept as raw JSON so one malformed event cannot hide its siblings.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub events: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub source: Option<Source>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    User,
    Group,
    Room,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub text: Option<String>,
}

impl Event {
    /// Reduce a webhook event to what the router needs.
    pub fn into_inbound(self) -> InboundEvent {
        let (user_id, source_kind) = match self.source {
            Some(source) => (source.user_id, source.kind),
            None => (None, SourceKind::Unknown),
        };
        let text = self
            .message
            .filter(|m| m.kind == "text")
            .and_then(|m| m.text);

        InboundEvent {
            kind: EventKind::from_wire(&self.kind),
            user_id,
            text,
            source_kind,
        }
    }
}

/// Convert one raw webhook event.
///
/// An event that does not match the expected shape keeps its type and sender
/// when they are readable strings and loses its text, so it is answered with
/// the welcome card.
pub fn parse_event(value: Value) -> InboundEvent {
    match serde_json::from_value::<Event>(value.clone()) {
        Ok(event) => event.into_inbound(),
        Err(e) => {
            warn!("Malformed webhook event ({}), falling back to welcome", e);
            InboundEvent {
                kind: EventKind::from_wire(value["type"].as_str().unwrap_or_default()),
                user_id: value
                    .pointer("/source/userId")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                text: None,
                source_kind: SourceKind::Unknown,
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct PushRequest {
    to: String,
    messages: Vec<Value>,
}

/// Render an outbound message as a LINE message object.
pub fn to_line_message(message: &OutboundMessage) -> Value {
    match message {
        OutboundMessage::Text(text) => json!({ "type": "text", "text": text }),
        OutboundMessage::Card(card) => json!({
            "type": "flex",
            "altText": card.alt_text,
            "contents": bubble(card),
        }),
    }
}

fn bubble(card: &Card) -> Value {
    let mut header = json!({
        "type": "text",
        "text": card.header,
        "weight": "bold",
        "size": "lg",
        "wrap": true,
    });
    let mut body = json!({
        "type": "text",
        "text": card.body,
        "size": "sm",
        "color": BODY_COLOR,
        "margin": "md",
        "wrap": true,
    });
    if card.centered {
        header["align"] = json!("center");
        body["align"] = json!("center");
    } else {
        header["color"] = json!(BRAND_COLOR);
    }

    let mut bubble = json!({
        "type": "bubble",
        "body": {
            "type": "box",
            "layout": "vertical",
            "contents": [header, body],
        },
    });

    if !card.buttons.is_empty() {
        let buttons: Vec<Value> = card
            .buttons
            .iter()
            .map(|button| {
                let action = json!({ "type": "uri", "label": button.label, "uri": button.uri });
                match button.style {
                    ButtonStyle::Primary => json!({
                        "type": "button",
                        "style": "primary",
                        "color": BRAND_COLOR,
                        "action": action,
                    }),
                    ButtonStyle::Link => json!({
                        "type": "button",
                        "style": "link",
                        "action": action,
                    }),
                }
            })
            .collect();

        bubble["footer"] = json!({
            "type": "box",
            "layout": "vertical",
            "spacing": "sm",
            "contents": buttons,
        });
    }

    bubble
}

/// Why a push did not go through.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("failed to send request to LINE API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LINE API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Delivers messages to users.
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn push(&self, user_id: &str, message: &OutboundMessage) -> Result<(), PushError>;
}

/// Push client for the LINE Messaging API.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    api_base_url: String,
    access_token: String,
}

impl LineClient {
    pub fn new(api_base_url: &str, access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }
}

#[async_trait]
impl PushGateway for LineClient {
    async fn push(&self, user_id: &str, message: &OutboundMessage) -> Result<(), PushError> {
        let url = format!("{}/v2/bot/message/push", self.api_base_url);
        let request = PushRequest {
            to: user_id.to_string(),
            messages: vec![to_line_message(message)],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Api { status, body });
        }

        info!("Pushed message to {}", user_id);
        Ok(())
    }
}
