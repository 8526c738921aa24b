//! Content store: index listing and post bodies
//!
//! The index is a JSON array of entries (or an object with a `posts` array).
//! Entries are validated one at a time; a malformed entry is logged and
//! skipped so a single typo never empties the listing.

use std::collections::HashSet;

use serde_json::Value;

use crate::config::ContentConfig;
use crate::error::ContentError;
use crate::post::{Post, PostMeta};
use crate::render::render_markdown;
use crate::source::ContentSource;

#[derive(Clone, Debug)]
pub struct ContentStore<S> {
    source: S,
    config: ContentConfig,
    index: Vec<PostMeta>,
}

impl<S: ContentSource> ContentStore<S> {
    pub fn new(source: S, config: ContentConfig) -> Self {
        Self { source, config, index: Vec::new() }
    }

    #[inline]
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Entries from the last successful `load_index`, newest first
    #[inline]
    pub fn index(&self) -> &[PostMeta] {
        &self.index
    }

    pub fn get(&self, slug: &str) -> Option<&PostMeta> {
        self.index.iter().find(|meta| meta.slug == slug)
    }

    /// Fetch and parse the index
    ///
    /// Fails only when the index itself is unreachable or is not a list.
    pub async fn load_index(&mut self) -> Result<&[PostMeta], ContentError> {
        let text = self.source.fetch_text(&self.config.index_path).await?;
        self.index = parse_index(&text)?;
        tracing::debug!(entries = self.index.len(), "content index loaded");
        Ok(&self.index)
    }

    /// Fetch and render one post
    pub async fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        let meta = self
            .get(slug)
            .cloned()
            .ok_or_else(|| ContentError::UnknownPost(slug.to_string()))?;

        let markdown = self.source.fetch_text(&meta.body_path()).await?;
        let html = render_markdown(&markdown)?;
        Ok(Post { meta, markdown, html })
    }

    /// Load every indexed post, skipping any whose body cannot be loaded
    pub async fn load_all(&self) -> Vec<Post> {
        let mut posts = Vec::with_capacity(self.index.len());
        for meta in &self.index {
            match self.load_post(&meta.slug).await {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!(slug = %meta.slug, error = %e, "skipping post"),
            }
        }
        posts
    }

    /// Indexed entries carrying `tag`
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a PostMeta> + 'a {
        self.index.iter().filter(move |meta| meta.has_tag(tag))
    }
}

/// Parse an index document into valid entries, newest first
///
/// Entries with an empty slug or a slug already seen are dropped along with
/// entries that fail to deserialize.
pub fn parse_index(text: &str) -> Result<Vec<PostMeta>, ContentError> {
    let document: Value = serde_json::from_str(text).map_err(|e| ContentError::MalformedIndex(e.to_string()))?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("posts") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ContentError::MalformedIndex("expected a `posts` array".to_string())),
        },
        _ => return Err(ContentError::MalformedIndex("expected a list of entries".to_string())),
    };

    let mut seen = HashSet::new();
    let mut index = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        let meta: PostMeta = match serde_json::from_value(entry) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping malformed index entry");
                continue;
            }
        };
        if meta.slug.trim().is_empty() {
            tracing::warn!(position, "skipping index entry without slug");
            continue;
        }
        if !seen.insert(meta.slug.clone()) {
            tracing::warn!(position, slug = %meta.slug, "skipping duplicate slug");
            continue;
        }
        index.push(meta);
    }

    // newest first; slug keeps same-day entries stable
    index.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(index)
}
