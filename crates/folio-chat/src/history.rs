//! Persisted chat transcript

use crate::config::{ChatConfig, MAX_HISTORY};
use crate::error::StorageError;
use crate::message::ChatMessage;
use crate::storage::KeyValueStore;

/// Transcript stored as a JSON array under a fixed key
pub struct ChatHistory<S> {
    store: S,
    key: String,
    max: usize,
}

impl<S: KeyValueStore> ChatHistory<S> {
    pub fn new(store: S, config: &ChatConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            max: config.max_history.max(1),
        }
    }

    /// Retention cap
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Read the stored transcript
    ///
    /// Missing, unreadable or corrupt data all load as an empty history.
    pub fn load(&self) -> Vec<ChatMessage> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "chat history unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(mut messages) => {
                trim_to(&mut messages, self.max);
                messages
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "corrupt chat history discarded");
                Vec::new()
            }
        }
    }

    /// Store the newest `max` messages
    pub fn save(&mut self, messages: &[ChatMessage]) -> Result<(), StorageError> {
        let start = messages.len().saturating_sub(self.max);
        let json = serde_json::to_string(&messages[start..])?;
        self.store.set(&self.key, &json)
    }

    /// Delete the stored transcript
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Drop the oldest messages beyond `max`
pub(crate) fn trim_to(messages: &mut Vec<ChatMessage>, max: usize) {
    if messages.len() > max {
        messages.drain(..messages.len() - max);
    }
}

impl<S: KeyValueStore + Default> Default for ChatHistory<S> {
    fn default() -> Self {
        Self {
            store: S::default(),
            key: ChatConfig::default().storage_key,
            max: MAX_HISTORY,
        }
    }
}
