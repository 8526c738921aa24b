//! Content index entries and rendered posts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the content index
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    /// Publication date, `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Markdown body path; defaults to `<slug>.md`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl PostMeta {
    /// Where the markdown body lives, relative to the content base
    pub fn body_path(&self) -> String {
        match &self.file {
            Some(file) => file.clone(),
            None => format!("{}.md", self.slug),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A post with its body loaded and rendered
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub markdown: String,
    pub html: String,
}
