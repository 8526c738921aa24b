//! Geometry types shared by the window manager and the shell
//!
//! All coordinates are CSS pixels relative to the top-left corner of the
//! desktop surface.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE, MIN_WINDOW_SIZE};
