//! Response header middleware

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Content type for a static asset path, by extension
pub fn mime_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "md" => Some("text/markdown; charset=utf-8"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Add isolation headers and fix MIME types for static assets
pub async fn add_headers(request: Request<Body>, next: Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // cross-origin isolation for the wasm bundle
    headers.insert("Cross-Origin-Opener-Policy", HeaderValue::from_static("same-origin"));
    headers.insert("Cross-Origin-Embedder-Policy", HeaderValue::from_static("require-corp"));

    // only successful static responses get a MIME fix; API bodies set their own
    if response.status().is_success() && !path.starts_with("/api/") {
        if let Some(mime) = mime_for(&path) {
            response.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/pkg/folio_desktop_bg.wasm", get(|| async { vec![0u8, 97, 115, 109] }))
            .route("/content/index.json", get(|| async { "[]" }))
            .fallback(|| async { axum::http::StatusCode::NOT_FOUND })
            .layer(axum::middleware::from_fn(add_headers))
    }

    async fn get_path(path: &str) -> Response<Body> {
        app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_mime_table() {
        assert_eq!(mime_for("/index.html"), Some("text/html; charset=utf-8"));
        assert_eq!(mime_for("/pkg/app.mjs"), Some("application/javascript; charset=utf-8"));
        assert_eq!(mime_for("/favicon.ico"), None);
        assert_eq!(mime_for("/no-extension"), None);
    }

    #[tokio::test]
    async fn test_wasm_served_with_wasm_mime_and_isolation() {
        let response = get_path("/pkg/folio_desktop_bg.wasm").await;
        let headers = response.headers();

        assert_eq!(headers[header::CONTENT_TYPE], "application/wasm");
        assert_eq!(headers["Cross-Origin-Opener-Policy"], "same-origin");
        assert_eq!(headers["Cross-Origin-Embedder-Policy"], "require-corp");
    }

    #[tokio::test]
    async fn test_json_mime() {
        let response = get_path("/content/index.json").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json; charset=utf-8");
    }

    #[tokio::test]
    async fn test_not_found_keeps_isolation_headers() {
        let response = get_path("/missing.js").await;
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("Cross-Origin-Opener-Policy"));
    }
}
