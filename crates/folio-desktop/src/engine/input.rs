//! Input handling for pointer events and drag operations

use crate::input::{DragState, InputResult};
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start a move drag on a window's frame
    ///
    /// Focuses the window first. Maximized windows stay put and return false.
    pub fn begin_drag(&mut self, id: WindowId, x: f32, y: f32) -> bool {
        if !self.focus_window(id) {
            return false;
        }
        let rect = match self.windows.get(id) {
            Some(w) if !w.is_maximized => w.rect,
            _ => return false,
        };
        self.input.start_window_move(id, rect, Vec2::new(x, y));
        true
    }

    /// Start a resize drag from one of the frame's handles
    pub fn begin_resize(&mut self, id: WindowId, handle: WindowRegion, x: f32, y: f32) -> bool {
        if !handle.is_resize() || !self.focus_window(id) {
            return false;
        }
        let rect = match self.windows.get(id) {
            Some(w) if !w.is_maximized => w.rect,
            _ => return false,
        };
        self.input.start_window_resize(id, handle, rect, Vec2::new(x, y));
        true
    }

    /// Commit the in-flight gesture
    ///
    /// Moves commit through `move_to` and resizes through `resize`; a
    /// gesture that ends where it started commits nothing. Returns true if
    /// the registry changed.
    pub fn end_drag(&mut self) -> bool {
        let Some(state) = self.input.end_drag() else {
            return false;
        };
        let id = state.window_id();
        let Some(current) = self.windows.get(id).map(|w| w.rect) else {
            return false;
        };

        let preview = state.preview();
        if preview == current {
            return false;
        }

        match state {
            DragState::MoveWindow { .. } => self.move_window(id, preview.x, preview.y),
            DragState::ResizeWindow { .. } => {
                tracing::debug!(window = %id, width = preview.width, height = preview.height, "resized window");
                self.resize_window(id, preview)
            }
        }
    }

    /// Focus a window from a title bar click that did not become a drag
    pub fn title_bar_click(&mut self, id: WindowId) -> bool {
        self.focus_window(id)
    }

    /// Handle pointer down
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        // A pointer-up the host never delivered must not leave a stale gesture
        self.input.cancel();

        let pos = Vec2::new(x, y);
        let (window_id, region) = match self.windows.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::Control(button) => {
                self.press_control(window_id, button);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.begin_drag(window_id, x, y);
                InputResult::Handled
            }
            WindowRegion::Content => self.handle_content_click(window_id, pos),
            handle => {
                self.begin_resize(window_id, handle, x, y);
                InputResult::Handled
            }
        }
    }

    /// Handle click on content area: focus and forward to the application
    fn handle_content_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(window_id);

        let content = match self.windows.get(window_id) {
            Some(w) => w.content_rect(),
            None => return InputResult::Unhandled,
        };
        let local = pos - content.position();
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
        }
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        match self.input.update(Vec2::new(x, y)) {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self) -> InputResult {
        if !self.input.is_dragging() {
            return InputResult::Unhandled;
        }
        self.end_drag();
        InputResult::Handled
    }

    /// CSS cursor for the frame region under the pointer
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        if let Some(DragState::ResizeWindow { handle, .. }) = self.input.drag_state() {
            return handle.cursor();
        }
        self.windows
            .region_at(Vec2::new(x, y))
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
    }
}
