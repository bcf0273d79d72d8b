//! Webhook payload types.
//!
//! Only the parts of the LINE webhook schema this crate consumes are modelled;
//! unknown fields are ignored and unknown event or message types collapse into
//! `Other` variants.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookEvent {
    Message(MessageEvent),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub webhook_event_id: Option<String>,
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text {
        #[serde(default)]
        id: String,
        text: String,
    },
    #[serde(other)]
    Other,
}

/// A text message addressed to the bot, ready for a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessageEvent {
    pub message_id: String,
    pub text: String,
    pub reply_token: Option<String>,
    pub webhook_event_id: Option<String>,
}

impl WebhookPayload {
    /// Text message events in delivery order; everything else is dropped.
    pub fn into_text_messages(self) -> Vec<TextMessageEvent> {
        self.events
            .into_iter()
            .filter_map(|event| match event {
                WebhookEvent::Message(MessageEvent {
                    reply_token,
                    webhook_event_id,
                    message: MessageContent::Text { id, text },
                }) => Some(TextMessageEvent {
                    message_id: id,
                    text,
                    reply_token,
                    webhook_event_id,
                }),
                _ => None,
            })
            .collect()
    }
}
