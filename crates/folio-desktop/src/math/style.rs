//! Frame chrome constants

use super::Size;

/// Frame style constants for window chrome and the taskbar
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
    /// Height reserved at the bottom of the surface for the taskbar
    pub taskbar_height: f32,
}

/// Default frame style matching the retro desktop theme
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    resize_handle_size: 8.0,
    button_size: 18.0,
    button_spacing: 6.0,
    button_margin: 8.0,
    taskbar_height: 40.0,
};

/// Smallest rectangle the drag/resize handles will produce
pub const MIN_WINDOW_SIZE: Size = Size::new(300.0, 200.0);
