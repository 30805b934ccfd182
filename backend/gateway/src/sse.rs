//! Decoder for the upstream server-sent-event stream.
//!
//! Chat-completion backends stream `data: {json}` lines ending with a
//! `data: [DONE]` sentinel. Network chunks can split a line (or a multi-byte
//! sequence inside one) anywhere, so bytes are buffered until a newline and
//! only complete lines are parsed.

use serde::Deserialize;
use tracing::trace;

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
}

/// Incremental SSE decoder; feed raw bytes, get content deltas out.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been seen; later input is ignored.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one chunk of upstream bytes, returning the content deltas of
    /// every line completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        if self.done {
            return Vec::new();
        }
        self.buf.extend_from_slice(chunk);

        let mut deltas = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let Ok(line) = std::str::from_utf8(&line) else {
                trace!("skipping non-utf8 sse line");
                continue;
            };
            match self.decode_line(line.trim()) {
                Some(delta) => deltas.push(delta),
                None if self.done => break,
                None => {}
            }
        }
        deltas
    }

    fn decode_line(&mut self, line: &str) -> Option<String> {
        let data = line.strip_prefix("data:")?.trim_start();
        if data == "[DONE]" {
            self.done = true;
            return None;
        }
        let chunk: StreamChunk = match serde_json::from_str(data) {
            Ok(chunk) => chunk,
            Err(err) => {
                trace!(error = %err, "skipping unparseable sse data line");
                return None;
            }
        };
        chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
    }
}
