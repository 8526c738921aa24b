//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the web front end to drive the desktop directly. Getters return
//! JSON strings; ids cross the boundary as plain numbers.

use wasm_bindgen::prelude::*;

use crate::engine::DesktopEngine;
use crate::math::Size;
use crate::shell::ShellConfig;
use crate::sound::{SoundCue, SoundError, SoundSink};
use crate::timer::TimerToken;
use crate::viewport::{RenderSurface, Viewport};
use crate::window::{OpenPolicy, WindowId, WindowRegion};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Surface that asks the browser window for its size on every query
struct BrowserSurface;

impl RenderSurface for BrowserSurface {
    fn viewport(&self) -> Size {
        let fallback = Viewport::default().size;
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(w), Some(h)) => Size::new(w as f32, h as f32),
            _ => fallback,
        }
    }
}

/// Sound sink that hands cue names to a JS callback
struct JsSoundSink {
    callback: js_sys::Function,
}

impl SoundSink for JsSoundSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        self.callback
            .call1(&JsValue::NULL, &JsValue::from_str(cue.name()))
            .map(|_| ())
            .map_err(|e| SoundError::Playback(format!("{:?}", e)))
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller with default shell settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_shell_config(ShellConfig::default())
    }

    /// Create a controller from a JSON `ShellConfig`; bad JSON falls back to defaults
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Self {
        let config = serde_json::from_str(json).unwrap_or_else(|e| {
            log(&format!("[desktop] Invalid shell config, using defaults: {}", e));
            ShellConfig::default()
        });
        Self::with_shell_config(config)
    }

    fn with_shell_config(config: ShellConfig) -> Self {
        console_error_panic_hook::set_once();
        let mut engine = DesktopEngine::with_config(config);
        engine.set_surface(Box::new(BrowserSurface));
        Self { engine }
    }

    /// Route sound cues to `callback(name)`
    #[wasm_bindgen]
    pub fn set_sound_callback(&mut self, callback: js_sys::Function) {
        self.engine.set_sound_sink(Box::new(JsSoundSink { callback }));
    }

    // =========================================================================
    // Boot & timers
    // =========================================================================

    /// Show the boot screen; returns the token for `complete_boot`
    #[wasm_bindgen]
    pub fn boot(&mut self) -> f64 {
        self.engine.boot(date_now()).as_u64() as f64
    }

    /// `setTimeout` callback for the boot screen
    #[wasm_bindgen]
    pub fn complete_boot(&mut self, token: f64) -> bool {
        self.engine.complete_boot(TimerToken::from_u64(token as u64))
    }

    /// Skip straight to the desktop
    #[wasm_bindgen]
    pub fn skip_boot(&mut self) -> bool {
        self.engine.skip_boot()
    }

    /// Drive shell timers; returns the fired events as JSON
    #[wasm_bindgen]
    pub fn tick(&mut self) -> String {
        let events = self.engine.tick(date_now());
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Current boot phase ("off", "booting", "ready")
    #[wasm_bindgen]
    pub fn get_boot_phase(&self) -> String {
        serde_json::to_value(self.engine.shell.boot_phase())
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "off".to_string())
    }

    // =========================================================================
    // Shell
    // =========================================================================

    /// Click a desktop icon; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn icon_click(&mut self, icon_id: &str) -> String {
        let outcome = self.engine.icon_click(icon_id, date_now());
        serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Click on empty desktop
    #[wasm_bindgen]
    pub fn desktop_click(&mut self) {
        self.engine.desktop_click();
    }

    /// Launch from the start menu (always a new window)
    #[wasm_bindgen]
    pub fn launch(&mut self, app_tag: &str) -> u64 {
        self.engine.launch_from_menu(app_tag).0
    }

    /// Open an application, reusing its window if one is open
    #[wasm_bindgen]
    pub fn open_app(&mut self, app_tag: &str) -> u64 {
        self.engine.open_app(app_tag, OpenPolicy::Singleton).0
    }

    /// Click a taskbar button
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: u64) -> bool {
        self.engine.taskbar_click(WindowId(id))
    }

    /// Get desktop icons as JSON
    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        serde_json::to_string(self.engine.shell.icons()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Currently selected icon id
    #[wasm_bindgen]
    pub fn get_selected_icon(&self) -> Option<String> {
        self.engine.shell.selected().map(str::to_string)
    }

    /// Get taskbar entries as JSON
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        serde_json::to_string(&self.engine.taskbar()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> bool {
        self.engine.focus_window(WindowId(id))
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.engine.close_window(WindowId(id))
    }

    /// Minimize or restore a window
    #[wasm_bindgen]
    pub fn toggle_minimize(&mut self, id: u64) -> bool {
        self.engine.toggle_minimize(WindowId(id))
    }

    /// Maximize or restore a window
    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: u64) -> bool {
        self.engine.toggle_maximize(WindowId(id))
    }

    /// Title bar click that did not turn into a drag
    #[wasm_bindgen]
    pub fn title_bar_click(&mut self, id: u64) -> bool {
        self.engine.title_bar_click(WindowId(id))
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.engine.windows.focused().map(|id| id.0)
    }

    /// Get visible window frames (back to front) as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.engine.frames()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the content view of one window as JSON
    #[wasm_bindgen]
    pub fn get_surface_json(&self, id: u64) -> String {
        match self.engine.surface_for(WindowId(id)) {
            Some(view) => serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string()),
            None => "null".to_string(),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down; returns an `InputResult` as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.pointer_down(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Handle pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(x, y).is_handled()
    }

    /// Handle pointer up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up().is_handled()
    }

    /// Start a resize from a handle the host drew ("n", "se", ...)
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: u64, handle: &str, x: f32, y: f32) -> bool {
        match WindowRegion::from_handle(handle) {
            Some(region) => self.engine.begin_resize(WindowId(id), region, x, y),
            None => {
                log(&format!("[desktop] Unknown resize handle: {}", handle));
                false
            }
        }
    }

    /// CSS cursor for the pointer position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine.cursor_at(x, y).to_string()
    }
}
