//! View state of a content panel

use serde::Serialize;

use crate::error::ContentError;

/// What a reader window shows
///
/// Failures become a message for the error panel; nothing escapes as a panic
/// or an unhandled rejection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ReaderState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ReaderState<T> {
    pub fn from_result(result: Result<T, ContentError>) -> Self {
        match result {
            Ok(value) => ReaderState::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, "content panel failed to load");
                ReaderState::Failed(e.to_string())
            }
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, ReaderState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ReaderState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for ReaderState<T> {
    fn default() -> Self {
        ReaderState::Loading
    }
}
