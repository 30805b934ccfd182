//! HTTP relay client.
//!
//! Sends the message list to the gateway's `POST /api/chat` endpoint and
//! consumes the unframed plain-text body as it streams in. Byte chunks can
//! end in the middle of a multi-byte sequence, so the incomplete suffix is
//! carried over to the next fragment instead of being decoded lossily.

use async_trait::async_trait;
use futures::StreamExt;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;

use aria_core::{AriaError, ChatTurn, FragmentStream, StreamRelay};

pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    messages: Vec<WireMessage<'a>>,
}

#[async_trait]
impl StreamRelay for HttpRelay {
    async fn stream_chat(&self, turns: &[ChatTurn]) -> Result<FragmentStream, AriaError> {
        let body = WireRequest {
            messages: turns
                .iter()
                .map(|turn| WireMessage {
                    role: turn.role.as_str(),
                    content: &turn.content,
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|err| AriaError::Relay(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AriaError::Relay(format!("gateway returned {status}: {detail}")));
        }

        let (tx, rx) = mpsc::channel::<Result<String, AriaError>>(32);
        tokio::spawn(async move {
            let mut chunker = Utf8Chunker::default();
            let mut bytes = response.bytes_stream();
            while let Some(chunk) = bytes.next().await {
                match chunk {
                    Ok(chunk) => {
                        let text = chunker.push(&chunk);
                        if !text.is_empty() && tx.send(Ok(text)).await.is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(Err(AriaError::Stream(err.to_string()))).await;
                        return;
                    }
                }
            }
            if !chunker.is_empty() {
                warn!("dropping incomplete trailing utf-8 bytes from stream");
            }
        });
        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

/// Re-chunks a byte stream on UTF-8 boundaries.
#[derive(Debug, Default)]
struct Utf8Chunker {
    pending: Vec<u8>,
}

impl Utf8Chunker {
    /// Append raw bytes and return the longest valid UTF-8 prefix; any
    /// incomplete trailing sequence waits for the next chunk.
    fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                let out = text.to_string();
                self.pending.clear();
                out
            }
            Err(err) => {
                let valid = err.valid_up_to();
                let out = String::from_utf8_lossy(&self.pending[..valid]).into_owned();
                self.pending.drain(..valid);
                out
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_ascii() {
        let mut chunker = Utf8Chunker::default();
        assert_eq!(chunker.push(b"hello"), "hello");
        assert!(chunker.is_empty());
    }

    #[test]
    fn carries_split_multibyte_sequence() {
        let mut chunker = Utf8Chunker::default();
        let bytes = "caffè ☕".as_bytes();
        let (a, b) = bytes.split_at(5); // splits the è
        let first = chunker.push(a);
        assert_eq!(first, "caff");
        assert!(!chunker.is_empty());
        let second = chunker.push(b);
        assert_eq!(second, "è ☕");
        assert!(chunker.is_empty());
    }

    #[test]
    fn byte_at_a_time_reassembles_exactly() {
        let mut chunker = Utf8Chunker::default();
        let text = "héllo ☂ wörld";
        let mut out = String::new();
        for byte in text.as_bytes() {
            out.push_str(&chunker.push(&[*byte]));
        }
        assert_eq!(out, text);
        assert!(chunker.is_empty());
    }

    #[test]
    fn wire_message_serializes_role_and_content() {
        let turn = ChatTurn::user("hi");
        let body = WireRequest {
            messages: vec![WireMessage {
                role: turn.role.as_str(),
                content: &turn.content,
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }
}
