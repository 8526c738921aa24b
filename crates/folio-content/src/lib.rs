//! Case files and blog posts for Folio OS
//!
//! Content is a JSON index plus one markdown file per entry. The store lists
//! the index, fetches bodies on demand and renders them to HTML; the reader
//! state turns any failure into an error panel message.

pub mod config;
pub mod error;
pub mod post;
pub mod reader;
pub mod render;
pub mod source;
pub mod store;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::ContentConfig;
pub use error::ContentError;
pub use post::{Post, PostMeta};
pub use reader::ReaderState;
pub use render::render_markdown;
pub use source::{ContentSource, HttpContentSource, MemorySource};
pub use store::{parse_index, ContentStore};
