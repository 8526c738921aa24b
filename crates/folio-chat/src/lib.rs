//! Chat terminal for Folio OS
//!
//! A small chat client with a handful of personas. Replies come from a
//! single HTTP endpoint; when that fails in any way the persona answers from
//! a local pool instead, so the terminal never shows an error bubble.
//!
//! - [`session`]: transcript, loading flag and the send turn
//! - [`backend`]: request shape, backend trait and the HTTP client
//! - [`fallback`]: deterministic offline replies
//! - [`history`] / [`storage`]: transcript persistence
//!
//! ```rust
//! use folio_chat::{fallback_reply, Personality};
//!
//! let reply = fallback_reply(Personality::Butler, "What are your skills?");
//! assert!(reply.contains("Rust"));
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod fallback;
pub mod history;
pub mod message;
pub mod personality;
pub mod session;
pub mod storage;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use backend::{ChatBackend, ChatRequest, ErrorBody, HttpChatBackend, Utf8Decoder, WireMessage};
pub use config::{ChatConfig, HISTORY_KEY, MAX_HISTORY};
pub use error::{ChatError, StorageError};
pub use fallback::fallback_reply;
pub use history::ChatHistory;
pub use message::{ChatMessage, Role};
pub use personality::Personality;
pub use session::{ChatSession, ReplySource};
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(feature = "wasm")]
pub use storage::LocalStorageStore;
