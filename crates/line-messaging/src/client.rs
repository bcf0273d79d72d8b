use std::io::Read;
use std::time::Duration;

use http::Request;
use serde::Serialize;
use tracing::debug;
use ureq::Agent;

use crate::error::LineError;

pub const DEFAULT_API_BASE: &str = "https://api.line.me";

const REPLY_PATH: &str = "/v2/bot/message/reply";

/// Sends a text reply addressed by a webhook reply token.
///
/// Implementations block; async callers run them on a blocking thread.
pub trait ReplyClient: Send + Sync {
    fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), LineError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<OutboundMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OutboundMessage<'a> {
    Text { text: &'a str },
}

/// Messaging API client bound to one channel access token.
pub struct LineApiClient {
    agent: Agent,
    api_base: String,
    access_token: String,
}

impl LineApiClient {
    pub fn with_api_base(
        access_token: impl Into<String>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<(), LineError> {
        let url = format!("{}{path}", self.api_base);
        let body = serde_json::to_vec(payload)?;
        let request = Request::builder()
            .method("POST")
            .uri(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.access_token))
            .body(body)?;
        let response = self.agent.run(request)?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "LINE API call finished");
        if status.is_success() {
            return Ok(());
        }
        let mut body = String::new();
        response
            .into_body()
            .into_reader()
            .read_to_string(&mut body)
            .map_err(LineError::Read)?;
        Err(LineError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

impl ReplyClient for LineApiClient {
    fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), LineError> {
        let payload = ReplyRequest {
            reply_token,
            messages: vec![OutboundMessage::Text { text }],
        };
        self.post_json(REPLY_PATH, &payload)
    }
}

impl std::fmt::Debug for LineApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineApiClient")
            .field("api_base", &self.api_base)
            .field("access_token", &"***")
            .finish()
    }
}
