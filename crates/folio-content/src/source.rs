//! Where content comes from

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ContentError;

/// Fetches raw text by path
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError>;
}

/// Content served over HTTP under a base URL
#[derive(Clone, Debug)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL for a content path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentSource for HttpContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching content");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ContentError::fetch(path, e))?;

        response.text().await.map_err(|e| ContentError::fetch(path, e))
    }
}

/// Content held in memory, keyed by path
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        self.files
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }
}
