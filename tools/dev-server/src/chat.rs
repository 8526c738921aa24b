//! Chat endpoint
//!
//! `POST /api/chat` takes `{ personality, messages }`. A completion comes
//! back as `text/plain`; anything else is a JSON `{ error, fallback }` body
//! whose fallback is already in the persona's voice, so the browser can show
//! it as is.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use folio_chat::{fallback_reply, ChatBackend, ChatError, ChatRequest, ErrorBody, Role};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// Completion provider behind the endpoint
pub type SharedUpstream = Arc<dyn ChatBackend + Send + Sync>;

#[derive(Clone, Default)]
pub struct ChatState {
    /// None when no credential is configured
    pub upstream: Option<SharedUpstream>,
}

impl ChatState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let timeout = Duration::from_millis(config.chat_timeout_ms);
        let upstream = config.chat_api_key.as_ref().and_then(|key| {
            match OpenAiUpstream::new(&config.chat_api_url, key, &config.chat_model, timeout) {
                Ok(upstream) => Some(Arc::new(upstream) as SharedUpstream),
                Err(e) => {
                    tracing::error!(error = %e, "could not build upstream client; chat runs on fallbacks");
                    None
                }
            }
        });
        Self { upstream }
    }
}

/// Chat routes; CORS is open so a front end on another dev port can call in
pub fn routes(state: ChatState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new().route("/api/chat", post(chat)).layer(cors).with_state(state)
}

async fn chat(State(state): State<ChatState>, Json(request): Json<ChatRequest>) -> Response {
    let Some(upstream) = state.upstream else {
        tracing::warn!(personality = request.personality.id(), "chat request without credential");
        return error_response(StatusCode::SERVICE_UNAVAILABLE, ChatError::MissingCredential, &request);
    };

    match upstream.complete(&request).await {
        Ok(text) => {
            tracing::debug!(personality = request.personality.id(), chars = text.len(), "chat completion");
            ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat upstream failed");
            error_response(StatusCode::BAD_GATEWAY, e, &request)
        }
    }
}

fn error_response(status: StatusCode, error: ChatError, request: &ChatRequest) -> Response {
    let last_user = request
        .messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    let body = ErrorBody {
        error: error.to_string(),
        fallback: Some(fallback_reply(request.personality, last_user)),
    };
    (status, Json(body)).into_response()
}

// =============================================================================
// OpenAI-compatible upstream
// =============================================================================

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completions API client
pub struct OpenAiUpstream {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiUpstream {
    pub fn new(url: &str, api_key: &str, model: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            url: url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl ChatBackend for OpenAiUpstream {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let mut messages = vec![CompletionMessage {
            role: "system",
            content: request.personality.system_prompt(),
        }];
        messages.extend(request.messages.iter().map(|m| CompletionMessage {
            role: match m.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: &m.content,
        }));

        let body = CompletionRequest { model: &self.model, messages };
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ChatError::Decode("completion had no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use folio_chat::{ChatMessage, Personality};
    use tower::ServiceExt;

    struct Canned(Result<&'static str, u16>);

    #[async_trait]
    impl ChatBackend for Canned {
        async fn complete(&self, _request: &ChatRequest) -> Result<String, ChatError> {
            self.0.map(str::to_string).map_err(ChatError::Status)
        }
    }

    fn state(upstream: Option<Canned>) -> ChatState {
        ChatState { upstream: upstream.map(|u| Arc::new(u) as SharedUpstream) }
    }

    fn chat_request(personality: Personality, text: &str) -> Request<Body> {
        let request = ChatRequest::new(personality, &[ChatMessage::user(text)], 20);
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&request).unwrap()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credential_answers_503_with_fallback() {
        let response = routes(state(None))
            .oneshot(chat_request(Personality::Hacker, "what projects?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));

        let body: ErrorBody = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body.error.contains("credential"));
        assert_eq!(body.fallback.as_deref(), Some("ls ~/case-files. it's all there."));
    }

    #[tokio::test]
    async fn test_completion_is_plain_text() {
        let response = routes(state(Some(Canned(Ok("Elementary.")))))
            .oneshot(chat_request(Personality::Detective, "who?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(body_text(response).await, "Elementary.");
    }

    #[tokio::test]
    async fn test_upstream_failure_answers_502() {
        let response = routes(state(Some(Canned(Err(429)))))
            .oneshot(chat_request(Personality::Butler, "hello there"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorBody = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body.error.contains("429"));
        assert_eq!(
            body.fallback.as_deref(),
            Some("A pleasure to receive you. Do make yourself comfortable.")
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/chat")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = routes(state(None)).oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"messages\": 3}"))
            .unwrap();
        let response = routes(state(None)).oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_stalled_upstream_answers_502_within_deadline() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/chat/completions", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let upstream = OpenAiUpstream::new(&url, "sk-test", "model", Duration::from_millis(200)).unwrap();
        let state = ChatState { upstream: Some(Arc::new(upstream) as SharedUpstream) };

        let response = tokio::time::timeout(
            Duration::from_secs(5),
            routes(state).oneshot(chat_request(Personality::Hacker, "status?")),
        )
        .await
        .expect("upstream call outlived its deadline")
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorBody = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body.fallback.as_deref(), Some(fallback_reply(Personality::Hacker, "status?").as_str()));
    }
}
