use thiserror::Error;

/// Failures while authenticating or decoding an inbound webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("signature header missing")]
    MissingSignature,
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("invalid channel secret")]
    InvalidSecret,
    #[error("malformed webhook payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl WebhookError {
    /// True for failures of the authenticity check itself.
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSignature
                | WebhookError::InvalidSignature
                | WebhookError::InvalidSecret
        )
    }
}

/// Failures of outbound Messaging API calls.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),
    #[error("failed to read response: {0}")]
    Read(#[source] std::io::Error),
    #[error("LINE API returned {status}: {body}")]
    Api { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_signature_errors() {
        assert!(WebhookError::MissingSignature.is_signature_error());
        assert!(WebhookError::InvalidSignature.is_signature_error());
        let payload = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!WebhookError::from(payload).is_signature_error());
    }

    #[test]
    fn api_error_mentions_status() {
        let err = LineError::Api {
            status: 400,
            body: r#"{"message":"Invalid reply token"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"LINE API returned 400: {"message":"Invalid reply token"}"#
        );
    }
}
