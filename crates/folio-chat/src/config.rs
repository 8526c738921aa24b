//! Chat client settings

use serde::{Deserialize, Serialize};

/// localStorage key the transcript lives under
pub const HISTORY_KEY: &str = "folio-os.chat-history";

/// Most messages kept in stored history
pub const MAX_HISTORY: usize = 100;

/// Chat client configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatConfig {
    /// URL the chat request is POSTed to
    pub endpoint: String,
    /// Messages retained in stored history (oldest dropped first)
    pub max_history: usize,
    /// Most recent messages sent to the backend as context
    pub context_messages: usize,
    /// Deadline for the whole request, body included
    pub timeout_ms: u64,
    /// Storage key for the transcript
    pub storage_key: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/chat".to_string(),
            max_history: MAX_HISTORY,
            context_messages: 20,
            timeout_ms: 30_000,
            storage_key: HISTORY_KEY.to_string(),
        }
    }
}
