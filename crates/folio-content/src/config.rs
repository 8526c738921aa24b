//! Content store settings

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Prefix every content path is resolved against
    pub base_url: String,
    /// Path of the JSON index, relative to `base_url`
    pub index_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: "/content".to_string(),
            index_path: "index.json".to_string(),
        }
    }
}
