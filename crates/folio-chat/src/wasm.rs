//! WASM exports for the chat terminal
//!
//! The session lives behind `Rc<RefCell<..>>` so a send can release the
//! borrow while the request is in flight; the terminal stays readable (and
//! reports loading) until the promise settles.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::backend::{ChatBackend, HttpChatBackend};
use crate::config::ChatConfig;
use crate::personality::Personality;
use crate::session::ChatSession;
use crate::storage::LocalStorageStore;

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

type BrowserSession = ChatSession<HttpChatBackend, LocalStorageStore>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonaInfo {
    id: &'static str,
    display_name: &'static str,
    greeting: &'static str,
}

/// Chat terminal for WASM - wraps ChatSession with JS-friendly API
#[wasm_bindgen]
pub struct ChatTerminal {
    session: Rc<RefCell<BrowserSession>>,
}

#[wasm_bindgen]
impl ChatTerminal {
    /// Create a terminal; `config_json` is an optional `ChatConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ChatTerminal, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log(&format!("[chat] Invalid config, using defaults: {}", e));
                ChatConfig::default()
            }),
            None => ChatConfig::default(),
        };

        let config = ChatConfig { endpoint: absolute_url(&config.endpoint), ..config };
        let backend = HttpChatBackend::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = ChatSession::new(backend, LocalStorageStore::open(), config);
        log(&format!("[chat] Terminal ready ({} messages restored)", session.messages().len()));

        Ok(Self { session: Rc::new(RefCell::new(session)) })
    }

    /// Send a message; resolves to the reply as JSON, or null if nothing was sent
    #[wasm_bindgen]
    pub fn send(&self, text: String) -> js_sys::Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            let (request, backend) = {
                let mut session = session.borrow_mut();
                match session.begin_send(&text) {
                    Some(request) => (request, session.backend().clone()),
                    None => return Ok(JsValue::NULL),
                }
            };

            let result = backend.complete(&request).await;
            let reply = session.borrow_mut().finish_send(result);

            Ok(match reply {
                Some((message, _)) => {
                    JsValue::from_str(&serde_json::to_string(&message).unwrap_or_else(|_| "{}".to_string()))
                }
                None => JsValue::NULL,
            })
        })
    }

    // =========================================================================
    // State getters
    // =========================================================================

    /// Transcript as JSON
    #[wasm_bindgen]
    pub fn get_messages_json(&self) -> String {
        serde_json::to_string(self.session.borrow().messages()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen]
    pub fn is_loading(&self) -> bool {
        self.session.borrow().is_loading()
    }

    #[wasm_bindgen]
    pub fn get_personality(&self) -> String {
        self.session.borrow().personality().id().to_string()
    }

    #[wasm_bindgen]
    pub fn get_greeting(&self) -> String {
        self.session.borrow().greeting().to_string()
    }

    /// Every persona as JSON
    #[wasm_bindgen]
    pub fn get_personalities_json(&self) -> String {
        let personas: Vec<PersonaInfo> = Personality::ALL
            .into_iter()
            .map(|p| PersonaInfo { id: p.id(), display_name: p.display_name(), greeting: p.greeting() })
            .collect();
        serde_json::to_string(&personas).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Switch persona by id; false for unknown ids
    #[wasm_bindgen]
    pub fn set_personality(&self, id: &str) -> bool {
        match Personality::from_id(id) {
            Some(p) => {
                self.session.borrow_mut().switch_personality(p);
                true
            }
            None => {
                log(&format!("[chat] Unknown personality: {}", id));
                false
            }
        }
    }

    /// Wipe the transcript and stored history
    #[wasm_bindgen]
    pub fn clear(&self) {
        self.session.borrow_mut().clear();
    }
}
