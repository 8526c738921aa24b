//! Window lifecycle and operations

use crate::math::{Rect, Vec2};
use crate::sound::SoundCue;
use crate::surface::descriptor;
use crate::window::{ControlButton, OpenPolicy, WindowConfig, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window
    ///
    /// Plays the open cue for a fresh window, or the focus cue when a
    /// singleton was reused and focus actually moved.
    pub fn open_window(&mut self, config: WindowConfig, policy: OpenPolicy) -> WindowId {
        let viewport = self.viewport();
        let before = self.windows.count();
        let previously_focused = self.windows.focused();

        let id = self.windows.open(config, policy, viewport);

        if self.windows.count() > before {
            self.play(SoundCue::WindowOpen);
        } else if previously_focused != Some(id) {
            self.play(SoundCue::WindowFocus);
        }
        id
    }

    /// Open an application by tag with its registered title and placement
    ///
    /// Tags nothing is registered under still open a window; its surface
    /// resolves to the unknown-application panel.
    pub fn open_app(&mut self, tag: &str, policy: OpenPolicy) -> WindowId {
        let config = match descriptor(tag) {
            Some(app) => {
                let config = WindowConfig::new(app.tag, app.title);
                match app.default_rect {
                    Some(rect) => config.with_rect(rect),
                    None => config,
                }
            }
            None => {
                tracing::warn!(tag, "no application registered for tag");
                WindowConfig::new(tag, tag)
            }
        };
        self.open_window(config, policy)
    }

    /// Focus a window, playing the focus cue only if focus changed
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        let changed = match self.windows.get(id) {
            Some(w) => !w.is_focused || w.is_minimized,
            None => return false,
        };

        self.windows.focus(id);
        if changed {
            self.play(SoundCue::WindowFocus);
        }
        true
    }

    /// Close a window
    pub fn close_window(&mut self, id: WindowId) -> bool {
        self.cancel_drag_on(id);
        if !self.windows.close(id) {
            return false;
        }
        self.play(SoundCue::WindowClose);
        true
    }

    /// Minimize or restore a window
    pub fn toggle_minimize(&mut self, id: WindowId) -> bool {
        self.cancel_drag_on(id);
        if !self.windows.toggle_minimize(id) {
            return false;
        }
        let minimized = self.windows.get(id).is_some_and(|w| w.is_minimized);
        self.play(if minimized { SoundCue::WindowMinimize } else { SoundCue::WindowRestore });
        true
    }

    /// Maximize or restore a window against the surface's current size
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        self.cancel_drag_on(id);
        let viewport = self.viewport();
        if !self.windows.toggle_maximize(id, viewport) {
            return false;
        }
        let maximized = self.windows.get(id).is_some_and(|w| w.is_maximized);
        self.play(if maximized { SoundCue::WindowMaximize } else { SoundCue::WindowRestore });
        true
    }

    /// Move a window
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) -> bool {
        self.windows.move_to(id, Vec2::new(x, y))
    }

    /// Resize a window
    pub fn resize_window(&mut self, id: WindowId, rect: Rect) -> bool {
        self.windows.resize(id, rect)
    }

    /// Dispatch a frame control button
    pub fn press_control(&mut self, id: WindowId, button: ControlButton) -> bool {
        match button {
            ControlButton::Minimize => self.toggle_minimize(id),
            ControlButton::Maximize => self.toggle_maximize(id),
            ControlButton::Close => self.close_window(id),
        }
    }

    /// Drop an in-flight gesture on `id` so it cannot commit afterwards
    fn cancel_drag_on(&mut self, id: WindowId) {
        if self.input.drag_state().is_some_and(|d| d.window_id() == id) {
            self.input.cancel();
        }
    }
}
