//! Chat session
//!
//! A session owns the transcript, the active persona and the loading flag.
//! Sending is split in two so a host that cannot hold the session across an
//! await (the browser terminal) can still drive it:
//!
//! 1. `begin_send` appends the user message, sets loading and hands back the
//!    request to deliver.
//! 2. `finish_send` takes whatever the backend produced and always appends
//!    exactly one assistant reply, clears loading and persists.
//!
//! `send` does both around a call to the session's own backend.

use crate::backend::{ChatBackend, ChatRequest};
use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::fallback::fallback_reply;
use crate::history::{trim_to, ChatHistory};
use crate::message::ChatMessage;
use crate::personality::Personality;
use crate::storage::KeyValueStore;

/// Where an assistant reply came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplySource {
    Backend,
    /// Fallback text suggested by the server
    ServerFallback,
    /// Generated locally by `fallback_reply`
    LocalFallback,
}

pub struct ChatSession<B, S> {
    backend: B,
    history: ChatHistory<S>,
    config: ChatConfig,
    personality: Personality,
    messages: Vec<ChatMessage>,
    /// Text of the in-flight user message
    pending: Option<String>,
}

impl<B: ChatBackend, S: KeyValueStore> ChatSession<B, S> {
    /// Start a session, restoring any stored transcript
    pub fn new(backend: B, store: S, config: ChatConfig) -> Self {
        let history = ChatHistory::new(store, &config);
        let messages = history.load();
        tracing::debug!(restored = messages.len(), "chat session started");

        Self {
            backend,
            history,
            config,
            personality: Personality::default(),
            messages,
            pending: None,
        }
    }

    #[inline]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True between `begin_send` and `finish_send`
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Greeting of the active persona
    pub fn greeting(&self) -> &'static str {
        self.personality.greeting()
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn history(&self) -> &ChatHistory<S> {
        &self.history
    }

    /// Change persona; the transcript is kept
    pub fn switch_personality(&mut self, personality: Personality) {
        if personality != self.personality {
            tracing::debug!(from = self.personality.id(), to = personality.id(), "personality switched");
            self.personality = personality;
        }
    }

    /// Append the user's message and build the backend request
    ///
    /// Returns None for blank input or while a reply is outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() || self.is_loading() {
            return None;
        }

        self.push(ChatMessage::user(text));
        self.pending = Some(text.to_string());
        Some(ChatRequest::new(self.personality, &self.messages, self.config.context_messages))
    }

    /// Record the backend outcome for the outstanding message
    ///
    /// Any failure or an empty completion is answered with a fallback in the
    /// persona's voice. Returns None if nothing was outstanding.
    pub fn finish_send(&mut self, result: Result<String, ChatError>) -> Option<(ChatMessage, ReplySource)> {
        let input = self.pending.take()?;

        let (content, source) = match result {
            Ok(text) if !text.trim().is_empty() => (text, ReplySource::Backend),
            Ok(_) => {
                tracing::warn!(personality = self.personality.id(), "empty completion, using local fallback");
                (fallback_reply(self.personality, &input), ReplySource::LocalFallback)
            }
            Err(e) => match e.suggested_fallback() {
                Some(text) => {
                    tracing::warn!(error = %e, "chat backend failed, using server fallback");
                    (text.to_string(), ReplySource::ServerFallback)
                }
                None => {
                    tracing::warn!(error = %e, "chat backend failed, using local fallback");
                    (fallback_reply(self.personality, &input), ReplySource::LocalFallback)
                }
            },
        };

        let reply = ChatMessage::assistant(content);
        self.push(reply.clone());
        self.persist();
        Some((reply, source))
    }

    /// Send `text` and wait for the reply
    pub async fn send(&mut self, text: &str) -> Option<(ChatMessage, ReplySource)> {
        let request = self.begin_send(text)?;
        let result = self.backend.complete(&request).await;
        self.finish_send(result)
    }

    /// Wipe the transcript and its stored copy
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending = None;
        if let Err(e) = self.history.clear() {
            tracing::warn!(error = %e, "could not clear stored chat history");
        }
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        trim_to(&mut self.messages, self.history.max());
    }

    fn persist(&mut self) {
        if let Err(e) = self.history.save(&self.messages) {
            tracing::warn!(error = %e, "could not persist chat history");
        }
    }
}
