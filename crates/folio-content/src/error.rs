//! Error types for content loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// The source has nothing at this path (HTTP 404)
    #[error("content not found: {0}")]
    NotFound(String),
    #[error("content request for {path} failed with status {status}")]
    Status { path: String, status: u16 },
    #[error("could not fetch {path}: {message}")]
    Fetch { path: String, message: String },
    /// The index is not a JSON list of entries
    #[error("malformed content index: {0}")]
    MalformedIndex(String),
    /// No index entry has this slug
    #[error("no post with slug {0:?}")]
    UnknownPost(String),
    #[error("could not render markdown: {0}")]
    Render(String),
}

impl ContentError {
    /// Build from a reqwest failure on `path`
    pub fn fetch(path: &str, e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) if status.as_u16() == 404 => ContentError::NotFound(path.to_string()),
            Some(status) => ContentError::Status { path: path.to_string(), status: status.as_u16() },
            None => ContentError::Fetch { path: path.to_string(), message: e.to_string() },
        }
    }
}
