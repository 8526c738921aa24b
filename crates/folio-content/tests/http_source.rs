//! ContentStore over HttpContentSource against a local axum server

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use folio_content::{ContentConfig, ContentError, ContentSource, ContentStore, HttpContentSource, ReaderState};

const INDEX: &str = r#"[
    {"slug": "first-light", "title": "First Light", "date": "2023-11-20", "summary": "Where it started."},
    {"slug": "night-shift", "title": "Night Shift", "date": "2024-02-14"},
    {"slug": "bad-date", "title": "Bad", "date": "someday"},
    {"slug": "lost", "title": "Lost", "date": "2022-05-05"}
]"#;

async fn serve() -> String {
    let app = Router::new()
        .route("/content/index.json", get(|| async { INDEX }))
        .route("/content/first-light.md", get(|| async { "# First Light\n\nIt was a dark and stormy night." }))
        .route("/content/night-shift.md", get(|| async { "Overtime, again.\n\n- coffee\n- more coffee\n" }))
        .route("/content/lost.md", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "disk on fire").into_response() }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/content", addr)
}

async fn store() -> ContentStore<HttpContentSource> {
    let base = serve().await;
    let config = ContentConfig { base_url: base.clone(), ..ContentConfig::default() };
    ContentStore::new(HttpContentSource::new(base), config)
}

#[tokio::test]
async fn test_index_listing_newest_first() {
    let mut store = store().await;
    let index = store.load_index().await.unwrap();

    let slugs: Vec<&str> = index.iter().map(|m| m.slug.as_str()).collect();
    assert_eq!(slugs, vec!["night-shift", "first-light", "lost"]);
    assert_eq!(index[1].summary, "Where it started.");
}

#[tokio::test]
async fn test_post_rendered_from_markdown() {
    let mut store = store().await;
    store.load_index().await.unwrap();

    let post = store.load_post("night-shift").await.unwrap();
    assert!(post.html.contains("<li>coffee</li>"));
}

#[tokio::test]
async fn test_server_error_body_skipped_in_load_all() {
    let mut store = store().await;
    store.load_index().await.unwrap();

    match store.load_post("lost").await {
        Err(ContentError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }

    let posts = store.load_all().await;
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let base = serve().await;
    let source = HttpContentSource::new(base);
    assert!(matches!(source.fetch_text("nowhere.md").await, Err(ContentError::NotFound(_))));
}

#[tokio::test]
async fn test_reader_state_for_failed_post() {
    let mut store = store().await;
    store.load_index().await.unwrap();

    let state = ReaderState::from_result(store.load_post("lost").await);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["state"], "failed");
    assert!(json["data"].as_str().unwrap().contains("500"));
}
