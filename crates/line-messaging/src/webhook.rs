use tracing::debug;

use crate::error::WebhookError;
use crate::event::{TextMessageEvent, WebhookPayload};
use crate::signature;

/// Authenticates and decodes inbound webhook calls for one channel.
#[derive(Clone)]
pub struct WebhookParser {
    channel_secret: String,
}

impl WebhookParser {
    pub fn new(channel_secret: impl Into<String>) -> Self {
        Self {
            channel_secret: channel_secret.into(),
        }
    }

    /// Verifies `signature` over the exact `raw_body` bytes, then returns the
    /// text message events it carries.
    ///
    /// Nothing is parsed unless the signature checks out.
    pub fn verify_and_parse(
        &self,
        raw_body: &[u8],
        signature: Option<&str>,
    ) -> Result<Vec<TextMessageEvent>, WebhookError> {
        signature::verify(self.channel_secret.as_bytes(), raw_body, signature)?;
        let payload: WebhookPayload = serde_json::from_slice(raw_body)?;
        let total = payload.events.len();
        let destination = payload.destination.clone().unwrap_or_default();
        let messages = payload.into_text_messages();
        debug!(%destination, total, text_messages = messages.len(), "webhook events parsed");
        Ok(messages)
    }
}

impl std::fmt::Debug for WebhookParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookParser")
            .field("channel_secret", &"***")
            .finish()
    }
}
