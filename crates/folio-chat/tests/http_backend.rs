//! HttpChatBackend against a local axum server
//!
//! Each test binds its own server on an ephemeral port and points the
//! backend at one of its routes.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use folio_chat::{
    fallback_reply, ChatBackend, ChatConfig, ChatError, ChatMessage, ChatRequest, ChatSession,
    HttpChatBackend, MemoryStore, Personality, ReplySource,
};

async fn streamed() -> Response {
    let text = "Élémentaire, mon cher. 🕵️";
    let bytes = text.as_bytes().to_vec();
    // chunk boundaries land inside multi-byte characters
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = bytes.chunks(3).map(|c| Ok(c.to_vec())).collect();

    Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap()
}

async fn echo(Json(request): Json<ChatRequest>) -> String {
    format!("{}:{}", request.personality.id(), request.messages.len())
}

async fn unavailable() -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "CHAT_API_KEY not set", "fallback": "The wire's been cut." })),
    )
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn serve() -> String {
    let app = Router::new()
        .route("/stream", post(streamed))
        .route("/echo", post(echo))
        .route("/unavailable", post(unavailable))
        .route("/broken", post(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn backend(endpoint: String) -> HttpChatBackend {
    let config = ChatConfig { endpoint, timeout_ms: 5_000, ..ChatConfig::default() };
    HttpChatBackend::new(&config).unwrap()
}

fn request(text: &str) -> ChatRequest {
    ChatRequest::new(Personality::Detective, &[ChatMessage::user(text)], 20)
}

#[tokio::test]
async fn test_streamed_completion_decoded_across_chunks() {
    let base = serve().await;
    let reply = backend(format!("{}/stream", base)).complete(&request("hi")).await.unwrap();
    assert_eq!(reply, "Élémentaire, mon cher. 🕵️");
}

#[tokio::test]
async fn test_request_body_shape() {
    let base = serve().await;
    let transcript = vec![ChatMessage::user("a"), ChatMessage::assistant("b"), ChatMessage::user("c")];
    let request = ChatRequest::new(Personality::Oracle, &transcript, 20);

    let reply = backend(format!("{}/echo", base)).complete(&request).await.unwrap();
    assert_eq!(reply, "oracle:3");
}

#[tokio::test]
async fn test_json_body_is_backend_error() {
    let base = serve().await;
    let err = backend(format!("{}/unavailable", base)).complete(&request("hi")).await.unwrap_err();

    match &err {
        ChatError::Backend { error, .. } => assert!(error.contains("CHAT_API_KEY")),
        other => panic!("expected backend error, got {:?}", other),
    }
    assert_eq!(err.suggested_fallback(), Some("The wire's been cut."));
}

#[tokio::test]
async fn test_non_success_status() {
    let base = serve().await;
    let err = backend(format!("{}/broken", base)).complete(&request("hi")).await.unwrap_err();
    assert!(matches!(err, ChatError::Status(500)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = backend(format!("http://{}/api/chat", addr)).complete(&request("hi")).await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_)));
}

#[tokio::test]
async fn test_session_over_http_uses_server_fallback() {
    let base = serve().await;
    let mut session = ChatSession::new(backend(format!("{}/unavailable", base)), MemoryStore::new(), ChatConfig::default());

    let (reply, source) = session.send("anyone there?").await.unwrap();
    assert_eq!(source, ReplySource::ServerFallback);
    assert_eq!(reply.content, "The wire's been cut.");
    assert!(!session.is_loading());
}

/// Accepts connections and never writes a byte back
async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/api/chat", addr)
}

#[tokio::test]
async fn test_stalled_backend_times_out_to_local_fallback() {
    let endpoint = silent_server().await;
    let config = ChatConfig { endpoint, timeout_ms: 200, ..ChatConfig::default() };
    let backend = HttpChatBackend::new(&config).unwrap();
    let mut session = ChatSession::new(backend, MemoryStore::new(), config);

    let sent = tokio::time::timeout(std::time::Duration::from_secs(5), session.send("hello?")).await;
    let (reply, source) = sent.expect("send stalled past its deadline").unwrap();

    assert_eq!(source, ReplySource::LocalFallback);
    assert_eq!(reply.content, fallback_reply(session.personality(), "hello?"));
    assert!(!session.is_loading());
}
