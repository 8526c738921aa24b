//! Server configuration from the environment

use std::path::PathBuf;

pub const DEFAULT_CHAT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Development server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port bound on localhost (`PORT`)
    pub port: u16,
    /// Directory with the built web bundle (`WEB_DIR`)
    pub web_dir: PathBuf,
    /// OpenAI-compatible chat completions URL (`CHAT_API_URL`)
    pub chat_api_url: String,
    /// Upstream credential (`CHAT_API_KEY`); without it chat answers 503
    pub chat_api_key: Option<String>,
    /// Upstream model name (`CHAT_MODEL`)
    pub chat_model: String,
    /// Deadline for one upstream completion (`CHAT_TIMEOUT_MS`)
    pub chat_timeout_ms: u64,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            web_dir: PathBuf::from("web"),
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_api_key: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            chat_timeout_ms: 30_000,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; unset, blank or unparsable values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
            web_dir: var("WEB_DIR").map(PathBuf::from).unwrap_or(defaults.web_dir),
            chat_api_url: var("CHAT_API_URL").unwrap_or(defaults.chat_api_url),
            chat_api_key: var("CHAT_API_KEY"),
            chat_model: var("CHAT_MODEL").unwrap_or(defaults.chat_model),
            chat_timeout_ms: var("CHAT_TIMEOUT_MS")
                .and_then(|ms| ms.parse().ok())
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.chat_timeout_ms),
            log_level: defaults.log_level,
        }
    }
}
