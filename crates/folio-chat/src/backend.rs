//! Chat backend client
//!
//! One POST to a single endpoint. The answer is either a streamed text
//! completion or a JSON `{ error, fallback }` object; the content type
//! decides which.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::message::{ChatMessage, Role};
use crate::personality::Personality;

/// A message as sent over the wire (no id, no timestamp)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for the chat endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub personality: Personality,
    pub messages: Vec<WireMessage>,
}

impl ChatRequest {
    /// Build a request from the last `context` messages of a transcript
    pub fn new(personality: Personality, transcript: &[ChatMessage], context: usize) -> Self {
        let start = transcript.len().saturating_sub(context);
        Self {
            personality,
            messages: transcript[start..]
                .iter()
                .map(|m| WireMessage { role: m.role, content: m.content.clone() })
                .collect(),
        }
    }
}

/// JSON body the endpoint returns when it cannot complete
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub fallback: Option<String>,
}

/// Something that turns a chat request into a completion
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError>;
}

/// Backend speaking to the chat endpoint over HTTP
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for HttpChatBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        // per request: fetch has no client-wide deadline
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;
        let status = response.status();

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));

        if is_json {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| ChatError::Decode(e.to_string()))?;
            return Err(ChatError::Backend { error: body.error, fallback: body.fallback });
        }

        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let mut decoder = Utf8Decoder::new();
        let mut text = String::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            text.push_str(&decoder.push(&chunk?));
        }
        text.push_str(&decoder.finish());

        tracing::debug!(chars = text.len(), "chat completion received");
        Ok(text)
    }
}

/// Incremental UTF-8 decoder for a chunked body
///
/// A multi-byte character split across chunks is held back until its tail
/// arrives. Invalid sequences become U+FFFD.
#[derive(Clone, Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns every complete character decoded so far
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(s) => {
                    out.push_str(s);
                    self.pending.clear();
                    return out;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    match e.error_len() {
                        // truncated character at the end: wait for more bytes
                        None => {
                            out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                            self.pending.drain(..valid);
                            return out;
                        }
                        Some(bad) => {
                            out.push_str(&String::from_utf8_lossy(&self.pending[..valid + bad]));
                            self.pending.drain(..valid + bad);
                        }
                    }
                }
            }
        }
    }

    /// Flush whatever is left at end of stream
    pub fn finish(&mut self) -> String {
        let out = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        out
    }
}
