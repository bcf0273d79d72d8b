//! `x-line-signature` computation and checking.
//!
//! LINE signs the raw request body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64 digest in the header.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Base64 HMAC-SHA256 of `body` under `secret`.
pub fn sign(secret: &[u8], body: &[u8]) -> Result<String, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Checks `signature` against the body. Comparison is constant time.
pub fn verify(secret: &[u8], body: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
    let signature = signature
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(WebhookError::MissingSignature)?;
    let expected = STANDARD
        .decode(signature)
        .map_err(|_| WebhookError::InvalidSignature)?;
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| WebhookError::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"channel-secret";

    #[test]
    fn accepts_own_signature() {
        let body = br#"{"destination":"U0","events":[]}"#;
        let signature = sign(SECRET, body).unwrap();
        assert!(verify(SECRET, body, Some(&signature)).is_ok());
    }

    #[test]
    fn rejects_other_secret() {
        let body = b"payload";
        let signature = sign(b"another-secret", body).unwrap();
        assert!(matches!(
            verify(SECRET, body, Some(&signature)),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_tampered_body() {
        let signature = sign(SECRET, b"payload").unwrap();
        assert!(matches!(
            verify(SECRET, b"payload ", Some(&signature)),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn missing_or_blank_header() {
        assert!(matches!(
            verify(SECRET, b"payload", None),
            Err(WebhookError::MissingSignature)
        ));
        assert!(matches!(
            verify(SECRET, b"payload", Some("  ")),
            Err(WebhookError::MissingSignature)
        ));
    }

    #[test]
    fn non_base64_header_is_invalid() {
        assert!(matches!(
            verify(SECRET, b"payload", Some("not base64!")),
            Err(WebhookError::InvalidSignature)
        ));
    }
}
