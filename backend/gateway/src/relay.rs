//! Inbound chat endpoint (`POST /api/chat`).
//!
//! Forwards the client's ordered message list to the upstream
//! OpenAI-compatible backend with `stream: true`, and relays the decoded
//! content deltas back as an unframed `text/plain` body. No retry, no
//! backpressure shaping, no transformation beyond SSE-to-text.

use anyhow::{Context, Result};
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use crate::server::GatewayState;
use crate::sse::SseDecoder;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InboundMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    model: &'a str,
    messages: &'a [InboundMessage],
    stream: bool,
}

/// Handler for `POST /api/chat`.
pub async fn chat(
    State(state): State<GatewayState>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    debug!(messages = payload.messages.len(), "relaying chat request");
    match open_upstream(&state, &payload).await {
        Ok(upstream) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            stream_body(upstream),
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "upstream request failed");
            (StatusCode::BAD_GATEWAY, format!("upstream error: {err}")).into_response()
        }
    }
}

async fn open_upstream(state: &GatewayState, payload: &ChatRequest) -> Result<reqwest::Response> {
    let body = UpstreamRequest {
        model: &state.config.model,
        messages: &payload.messages,
        stream: true,
    };
    let response = state
        .client
        .post(state.config.completions_url())
        .bearer_auth(&state.config.api_key)
        .json(&body)
        .send()
        .await
        .context("upstream request failed")?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        anyhow::bail!("upstream returned {status}: {detail}");
    }
    Ok(response)
}

/// Pump the upstream SSE stream into an unframed plain-text body.
///
/// A mid-stream upstream failure simply ends the body; the client accepts
/// whatever partial text it has folded as final.
fn stream_body(upstream: reqwest::Response) -> Body {
    let (tx, rx) = mpsc::channel::<Result<String, std::io::Error>>(32);
    tokio::spawn(async move {
        let mut decoder = SseDecoder::new();
        let mut bytes = upstream.bytes_stream();
        while let Some(chunk) = bytes.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    warn!(error = %err, "upstream stream interrupted");
                    return;
                }
            };
            for delta in decoder.push(&chunk) {
                // Send failure means the client hung up; stop pumping.
                if tx.send(Ok(delta)).await.is_err() {
                    return;
                }
            }
            if decoder.is_done() {
                return;
            }
        }
    });
    Body::from_stream(ReceiverStream::new(rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserializes_role_content_pairs() {
        let json = r#"{"messages":[{"role":"system","content":"be kind"},{"role":"user","content":"hi"}]}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content, "hi");
    }

    #[test]
    fn upstream_request_sets_stream_flag() {
        let messages = vec![InboundMessage {
            role: "user".into(),
            content: "hello".into(),
        }];
        let body = UpstreamRequest {
            model: "qwen3-4b",
            messages: &messages,
            stream: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stream"], true);
        assert_eq!(json["model"], "qwen3-4b");
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
