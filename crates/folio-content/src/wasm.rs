//! WASM exports for content panels
//!
//! Every call resolves to a `ReaderState` JSON string, so the front end only
//! ever renders loading, ready or an error panel. Promises never reject.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::ContentConfig;
use crate::reader::ReaderState;
use crate::source::HttpContentSource;
use crate::store::ContentStore;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Resolve a root-relative URL against the page origin
///
/// fetch through reqwest only accepts absolute URLs.
fn absolute_url(url: &str) -> String {
    if !url.starts_with('/') {
        return url.to_string();
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => format!("{}{}", origin, url),
        None => url.to_string(),
    }
}

fn state_json<T: Serialize>(state: &ReaderState<T>) -> JsValue {
    JsValue::from_str(&serde_json::to_string(state).unwrap_or_else(|_| "{\"state\":\"failed\"}".to_string()))
}

/// Content library for WASM - wraps ContentStore with JS-friendly API
#[wasm_bindgen]
pub struct ContentLibrary {
    store: Rc<RefCell<ContentStore<HttpContentSource>>>,
}

#[wasm_bindgen]
impl ContentLibrary {
    /// Create a library; `config_json` is an optional `ContentConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        let config: ContentConfig = match config_json.as_deref() {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log(&format!("[content] Invalid config, using defaults: {}", e));
                ContentConfig::default()
            }),
            None => ContentConfig::default(),
        };

        let source = HttpContentSource::new(absolute_url(&config.base_url));
        Self { store: Rc::new(RefCell::new(ContentStore::new(source, config))) }
    }

    /// Fetch the index; resolves to `ReaderState<PostMeta[]>` JSON
    #[wasm_bindgen]
    pub fn load_index(&self) -> js_sys::Promise {
        let cell = Rc::clone(&self.store);
        future_to_promise(async move {
            // load on a copy so no borrow is held across the fetch
            let mut store = cell.borrow().clone();
            let state = ReaderState::from_result(store.load_index().await.map(|index| index.to_vec()));
            if state.ready().is_some() {
                *cell.borrow_mut() = store;
            }
            Ok(state_json(&state))
        })
    }

    /// Fetch one post; resolves to `ReaderState<Post>` JSON
    #[wasm_bindgen]
    pub fn load_post(&self, slug: String) -> js_sys::Promise {
        let store = self.store.borrow().clone();
        future_to_promise(async move {
            let state = ReaderState::from_result(store.load_post(&slug).await);
            Ok(state_json(&state))
        })
    }

    /// Index from the last successful load as JSON
    #[wasm_bindgen]
    pub fn get_index_json(&self) -> String {
        serde_json::to_string(self.store.borrow().index()).unwrap_or_else(|_| "[]".to_string())
    }
}
