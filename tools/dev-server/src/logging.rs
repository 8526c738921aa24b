//! Log setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ServerConfig;

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init(config: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init();
    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}

/// Log configuration (without the credential)
pub fn log_config(config: &ServerConfig) {
    tracing::info!(
        port = config.port,
        web_dir = %config.web_dir.display(),
        chat_api_url = %config.chat_api_url,
        chat_model = %config.chat_model,
        chat_timeout_ms = config.chat_timeout_ms,
        chat_enabled = config.chat_api_key.is_some(),
        "server configuration loaded"
    );
}
