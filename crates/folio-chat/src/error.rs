//! Error types for the chat client

use thiserror::Error;

/// Why a backend call produced no completion
#[derive(Debug, Error)]
pub enum ChatError {
    /// Request never completed (DNS, connection reset, CORS, timeout)
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status
    #[error("backend returned status {0}")]
    Status(u16),
    /// The server has no API credential configured
    #[error("chat backend has no credential configured")]
    MissingCredential,
    /// Backend answered with a JSON `{ error, fallback }` body
    #[error("backend error: {error}")]
    Backend { error: String, fallback: Option<String> },
    /// Body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ChatError {
    /// Reply text the backend suggested, if any
    pub fn suggested_fallback(&self) -> Option<&str> {
        match self {
            ChatError::Backend { fallback: Some(text), .. } if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ChatError::Status(status.as_u16()),
            None if e.is_decode() => ChatError::Decode(e.to_string()),
            None => ChatError::Network(e.to_string()),
        }
    }
}

/// Failure reading or writing persisted chat state
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage available (private browsing, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The store refused the write (quota exceeded)
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}
