use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use line_messaging::{LineApiClient, LineError, ReplyClient};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct RecordedCall {
    authorization: Option<String>,
    content_type: Option<String>,
    body: Value,
}

type CallHistory = Arc<Mutex<Vec<RecordedCall>>>;

async fn spawn_fake_api(
    status: StatusCode,
    reply: &'static str,
) -> Result<(String, CallHistory)> {
    let history: CallHistory = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/v2/bot/message/reply",
            post(
                move |State(history): State<CallHistory>,
                      headers: HeaderMap,
                      body: Bytes| async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|value| value.to_str().ok())
                            .map(ToOwned::to_owned)
                    };
                    let call = RecordedCall {
                        authorization: header("authorization"),
                        content_type: header("content-type"),
                        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
                    };
                    history.lock().unwrap().push(call);
                    (status, reply)
                },
            ),
        )
        .with_state(history.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok((format!("http://{addr}"), history))
}

async fn reply(
    client: LineApiClient,
    token: &'static str,
    text: &'static str,
) -> Result<Result<(), LineError>> {
    Ok(tokio::task::spawn_blocking(move || client.reply_text(token, text)).await?)
}

#[tokio::test]
async fn posts_reply_with_bearer_token() -> Result<()> {
    let (base, history) = spawn_fake_api(StatusCode::OK, "{}").await?;
    let client = LineApiClient::with_api_base("channel-token", base, Duration::from_secs(5));

    reply(client, "reply-token-1", "✅ ได้รับรายงานเลือกตั้งครบถ้วน ขอบคุณครับ").await??;

    let calls = history.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.authorization.as_deref(), Some("Bearer channel-token"));
    assert_eq!(call.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        call.body,
        json!({
            "replyToken": "reply-token-1",
            "messages": [
                {"type": "text", "text": "✅ ได้รับรายงานเลือกตั้งครบถ้วน ขอบคุณครับ"}
            ]
        })
    );
    Ok(())
}

#[tokio::test]
async fn api_rejection_surfaces_status_and_body() -> Result<()> {
    let (base, history) =
        spawn_fake_api(StatusCode::BAD_REQUEST, r#"{"message":"Invalid reply token"}"#).await?;
    let client = LineApiClient::with_api_base("channel-token", base, Duration::from_secs(5));

    let result = reply(client, "expired", "hello").await?;

    match result {
        Err(LineError::Api { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("Invalid reply token"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(history.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    let client = LineApiClient::with_api_base(
        "channel-token",
        format!("http://{addr}"),
        Duration::from_secs(2),
    );

    let result = reply(client, "token", "hello").await?;

    assert!(matches!(result, Err(LineError::Transport(_))), "{result:?}");
    Ok(())
}
