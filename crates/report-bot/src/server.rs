//! HTTP surface: `POST /callback` for LINE webhook deliveries.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use line_messaging::{LineApiClient, SIGNATURE_HEADER, WebhookParser};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::handler::MessageHandler;

#[derive(Clone)]
pub struct AppState {
    parser: WebhookParser,
    handler: Arc<MessageHandler>,
}

impl AppState {
    pub fn new(parser: WebhookParser, handler: MessageHandler) -> Self {
        Self {
            parser,
            handler: Arc::new(handler),
        }
    }

    /// Wires the real LINE client from startup configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = LineApiClient::with_api_base(
            config.channel_access_token.clone(),
            config.api_base_url.clone(),
            config.reply_timeout,
        );
        Self::new(
            WebhookParser::new(config.channel_secret.clone()),
            MessageHandler::new(Arc::new(client)),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/callback", post(callback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(wait_for_shutdown())
        .await
}

/// Verifies the delivery and hands each text message to the handler on the
/// blocking pool. The acknowledgement does not wait for replies.
async fn callback(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    info!(body = %String::from_utf8_lossy(&body), "webhook request body");

    let events = match state.parser.verify_and_parse(&body, signature) {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, signature_error = err.is_signature_error(), "webhook rejected");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    for event in events {
        let handler = state.handler.clone();
        tokio::task::spawn_blocking(move || handler.on_message(&event));
    }

    (StatusCode::OK, "OK").into_response()
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
