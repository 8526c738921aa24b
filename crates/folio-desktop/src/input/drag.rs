//! Drag state for in-flight gestures

use crate::math::{Rect, Vec2};
use crate::window::{WindowId, WindowRegion};

/// Current drag operation state
///
/// Both variants carry a live `preview` rectangle. Nothing reaches the
/// registry until the gesture ends.
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
        /// Where the frame is drawn right now
        preview: Rect,
    },
    /// Resizing a window by one of its handles
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: WindowRegion,
        /// Window rectangle at start
        start_rect: Rect,
        /// Pointer position at start
        start_pointer: Vec2,
        /// Where the frame is drawn right now
        preview: Rect,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Window the gesture applies to
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } | DragState::ResizeWindow { window_id, .. } => *window_id,
        }
    }

    /// Rectangle to draw while the gesture is in flight
    pub fn preview(&self) -> Rect {
        match self {
            DragState::MoveWindow { preview, .. } | DragState::ResizeWindow { preview, .. } => *preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_window_state() {
        let state = DragState::MoveWindow {
            window_id: WindowId(42),
            offset: Vec2::new(10.0, 20.0),
            preview: Rect::new(0.0, 0.0, 400.0, 300.0),
        };

        assert!(state.is_move());
        assert!(!state.is_resize());
        assert_eq!(state.window_id(), WindowId(42));
    }

    #[test]
    fn test_resize_window_state() {
        let start = Rect::new(100.0, 100.0, 800.0, 600.0);
        let state = DragState::ResizeWindow {
            window_id: WindowId(7),
            handle: WindowRegion::ResizeSE,
            start_rect: start,
            start_pointer: Vec2::new(900.0, 700.0),
            preview: start,
        };

        assert!(state.is_resize());
        assert_eq!(state.window_id(), WindowId(7));
        assert_eq!(state.preview(), start);
    }
}
