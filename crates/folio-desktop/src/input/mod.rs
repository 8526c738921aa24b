//! Input routing module
//!
//! Drag/resize state machine and double-click detection. These are the
//! gesture collaborators of the window manager: they turn raw pointer
//! events into the rectangles the registry is eventually asked to commit.

mod router;
mod drag;
mod result;
mod click;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;
pub use click::{ClickKind, ClickTracker, DOUBLE_CLICK_MS};

use crate::math::{Rect, MIN_WINDOW_SIZE};
use crate::window::WindowRegion;

/// Calculate the rectangle produced by dragging a resize handle by `(dx, dy)`
///
/// The result never drops below [`MIN_WINDOW_SIZE`]; when a north or west
/// handle hits the limit the opposite edge stays put.
pub fn calculate_resize(handle: WindowRegion, start: Rect, dx: f32, dy: f32) -> Rect {
    let min = MIN_WINDOW_SIZE;
    let mut rect = start;

    let grows_east = matches!(handle, WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE);
    let grows_west = matches!(handle, WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW);
    let grows_south = matches!(handle, WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW);
    let grows_north = matches!(handle, WindowRegion::ResizeN | WindowRegion::ResizeNE | WindowRegion::ResizeNW);

    if grows_east {
        rect.width = (start.width + dx).max(min.width);
    }
    if grows_west {
        rect.width = (start.width - dx).max(min.width);
        rect.x = start.right() - rect.width;
    }
    if grows_south {
        rect.height = (start.height + dy).max(min.height);
    }
    if grows_north {
        rect.height = (start.height - dy).max(min.height);
        rect.y = start.bottom() - rect.height;
    }

    rect
}
