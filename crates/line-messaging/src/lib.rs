//! Minimal LINE Messaging API integration.
//!
//! Covers the two calls a webhook bot needs: authenticating and parsing an
//! inbound callback ([`WebhookParser`]) and answering a message through the
//! reply endpoint ([`LineApiClient`]).

pub mod client;
pub mod error;
pub mod event;
pub mod signature;
pub mod webhook;

pub use client::{DEFAULT_API_BASE, LineApiClient, ReplyClient};
pub use error::{LineError, WebhookError};
pub use event::TextMessageEvent;
pub use signature::SIGNATURE_HEADER;
pub use webhook::WebhookParser;
