//! Per-message report handling.
//!
//! Only messages that start with [`report_core::COMMAND_PREFIX`] are treated as reports.
//! An earlier revision of the bot validated every message of five or more
//! characters instead; that length gate is gone and is not applied before the
//! prefix check.

use std::sync::Arc;

use line_messaging::{ReplyClient, TextMessageEvent};
use report_core::{compose_reply, extract_report, validate};
use tracing::{debug, info, warn};

/// What happened to one message. Callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a report command.
    Ignored,
    /// A report was checked but the event could not be answered.
    NoReplyToken,
    /// Reply delivered; `missing` fields were reported.
    Replied { missing: usize },
    /// Reply attempted and failed. Not retried.
    SendFailed,
}

pub struct MessageHandler {
    client: Arc<dyn ReplyClient>,
}

impl MessageHandler {
    pub fn new(client: Arc<dyn ReplyClient>) -> Self {
        Self { client }
    }

    /// Checks a text message and answers it. Never fails; send errors are
    /// logged and swallowed.
    pub fn on_message(&self, event: &TextMessageEvent) -> Outcome {
        let Some(report) = extract_report(&event.text) else {
            debug!(message_id = %event.message_id, "not a report command, ignored");
            return Outcome::Ignored;
        };

        let missing = validate(report);
        let reply = compose_reply(&missing);

        let Some(reply_token) = event.reply_token.as_deref() else {
            warn!(message_id = %event.message_id, "report has no reply token, skipping reply");
            return Outcome::NoReplyToken;
        };

        match self.client.reply_text(reply_token, &reply) {
            Ok(()) => {
                info!(
                    message_id = %event.message_id,
                    webhook_event_id = event.webhook_event_id.as_deref().unwrap_or_default(),
                    missing = missing.len(),
                    fields = ?missing.iter().map(|field| field.description()).collect::<Vec<_>>(),
                    "report reply sent"
                );
                Outcome::Replied {
                    missing: missing.len(),
                }
            }
            Err(err) => {
                warn!(
                    message_id = %event.message_id,
                    webhook_event_id = event.webhook_event_id.as_deref().unwrap_or_default(),
                    error = %err,
                    "failed to send report reply"
                );
                Outcome::SendFailed
            }
        }
    }
}
