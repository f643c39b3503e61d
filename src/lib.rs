//! LINE webhook bot for the ordering helper.
//!
//! Verifies inbound webhooks, remembers each user's interface language, and
//! pushes localized replies back through the LINE Messaging API.

pub mod composer;
pub mod config;
pub mod i18n;
pub mod liff;
pub mod line;
pub mod router;
pub mod security;
pub mod server;
pub mod store;
