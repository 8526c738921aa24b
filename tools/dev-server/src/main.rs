//! Development Server for Folio OS
//!
//! Serves the built web bundle with the COOP/COEP headers the wasm build
//! expects, and hosts the chat endpoint the terminal talks to.

mod chat;
mod config;
mod headers;
mod logging;

use axum::{http::StatusCode, routing::get_service, Router};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

use crate::chat::ChatState;
use crate::config::ServerConfig;

/// Full application router
fn app(config: &ServerConfig) -> Router {
    // Serve static files from the web directory
    let serve_dir = ServeDir::new(&config.web_dir).precompressed_gzip().precompressed_br();

    chat::routes(ChatState::from_config(config))
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(headers::add_headers))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    logging::init(&config);
    logging::log_config(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║             Folio OS Development Server           ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{:<5}                      ║", config.port);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    if config.chat_api_key.is_none() {
        tracing::warn!("CHAT_API_KEY not set; /api/chat will answer with fallbacks");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(&config)).await
}
