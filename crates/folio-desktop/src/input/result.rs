//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled by the window manager
    Handled,
    /// Input hit nothing the window manager owns (pass through)
    Unhandled,
    /// Input landed in a window's content and belongs to its application
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in content-local space
        local_x: f32,
        /// Y coordinate in content-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }
}
