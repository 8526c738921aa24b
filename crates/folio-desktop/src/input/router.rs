//! Input router state machine

use crate::math::{Rect, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::{calculate_resize, DragState};

/// Input router managing drag state
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, rect: Rect, pointer: Vec2) {
        self.drag = Some(DragState::MoveWindow {
            window_id,
            offset: pointer - rect.position(),
            preview: rect,
        });
    }

    /// Start window resize operation
    pub fn start_window_resize(&mut self, window_id: WindowId, handle: WindowRegion, rect: Rect, pointer: Vec2) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_rect: rect,
            start_pointer: pointer,
            preview: rect,
        });
    }

    /// Update the preview for a pointer move; returns the new preview
    pub fn update(&mut self, pointer: Vec2) -> Option<Rect> {
        match self.drag.as_mut()? {
            DragState::MoveWindow { offset, preview, .. } => {
                *preview = preview.with_position(pointer - *offset);
                Some(*preview)
            }
            DragState::ResizeWindow { handle, start_rect, start_pointer, preview, .. } => {
                let delta = pointer - *start_pointer;
                *preview = calculate_resize(*handle, *start_rect, delta.x, delta.y);
                Some(*preview)
            }
        }
    }

    /// End current drag operation, handing back its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the gesture without committing anything
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
