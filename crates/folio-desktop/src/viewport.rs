//! Rendering surface abstraction
//!
//! The only thing the window manager asks of the surface is its current
//! size, and it asks at the moment it needs it (maximize, placement).

use crate::math::Size;

/// Source of the current viewport size
pub trait RenderSurface {
    fn viewport(&self) -> Size;
}

/// Surface whose size is pushed in by the host on every resize
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Viewport {
    /// Create a viewport of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Size::new(width, height) }
    }
}

impl RenderSurface for Viewport {
    fn viewport(&self) -> Size {
        self.size
    }
}
