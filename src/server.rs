//! HTTP surface: the LINE webhook callback and a health probe.
//!
//! The callback acknowledges as soon as every event has been routed. Pushes run
//! in a detached task, so a slow or failing LINE API never delays the `200 OK`.

use crate::composer::MessageComposer;
use crate::config::Config;
use crate::line::{parse_event, LineClient, PushGateway, WebhookBody};
use crate::router::{Dispatcher, Reply};
use crate::security::verify_signature;
use crate::store::UserLocaleStore;
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Header carrying the base64 HMAC of the request body
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
    gateway: Arc<dyn PushGateway>,
    channel_secret: Arc<str>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, gateway: Arc<dyn PushGateway>, channel_secret: &str) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            gateway,
            channel_secret: Arc::from(channel_secret),
        }
    }
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/callback", post(callback))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until it fails.
pub async fn serve(config: &Config) -> Result<()> {
    let store = Arc::new(UserLocaleStore::new());
    let composer = MessageComposer::new(config.link_targets());
    let dispatcher = Dispatcher::new(store, composer);
    let gateway: Arc<dyn PushGateway> = Arc::new(LineClient::new(
        &config.line_api_base_url,
        &config.line_channel_access_token,
    ));

    let state = AppState::new(dispatcher, gateway, &config.line_channel_secret);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn callback(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(&state.channel_secret, &body, signature) {
        warn!("Rejected webhook with invalid signature");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let webhook: WebhookBody = match serde_json::from_slice(&body) {
        Ok(webhook) => webhook,
        Err(e) => {
            warn!("Ignoring unparseable webhook body: {}", e);
            WebhookBody::default()
        }
    };

    let replies: Vec<Reply> = webhook
        .events
        .into_iter()
        .filter_map(|event| state.dispatcher.dispatch(parse_event(event)))
        .collect();

    if !replies.is_empty() {
        let gateway = Arc::clone(&state.gateway);
        tokio::spawn(async move {
            for reply in &replies {
                deliver(gateway.as_ref(), reply).await;
            }
        });
    }

    (StatusCode::OK, "OK").into_response()
}

/// Push one reply. Failures are logged and not retried.
pub async fn deliver(gateway: &dyn PushGateway, reply: &Reply) {
    if let Err(e) = gateway.push(&reply.user_id, &reply.message).await {
        warn!("Failed to push message to {}: {}", reply.user_id, e);
    }
}
