//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (owned by the application surface)
    Content,
    /// One of the title bar control buttons
    Control(ControlButton),
    /// North (top) resize edge
    ResizeN,
    /// South (bottom) resize edge
    ResizeS,
    /// East (right) resize edge
    ResizeE,
    /// West (left) resize edge
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

/// Title bar buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Minimize,
    Maximize,
    Close,
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeN
                | WindowRegion::ResizeS
                | WindowRegion::ResizeE
                | WindowRegion::ResizeW
                | WindowRegion::ResizeNE
                | WindowRegion::ResizeNW
                | WindowRegion::ResizeSE
                | WindowRegion::ResizeSW
        )
    }

    /// Parse the short handle names used by the host ("n", "se", ...)
    pub fn from_handle(handle: &str) -> Option<Self> {
        match handle {
            "n" => Some(WindowRegion::ResizeN),
            "s" => Some(WindowRegion::ResizeS),
            "e" => Some(WindowRegion::ResizeE),
            "w" => Some(WindowRegion::ResizeW),
            "ne" => Some(WindowRegion::ResizeNE),
            "nw" => Some(WindowRegion::ResizeNW),
            "se" => Some(WindowRegion::ResizeSE),
            "sw" => Some(WindowRegion::ResizeSW),
            _ => None,
        }
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::Control(_) => "pointer",
            WindowRegion::ResizeN | WindowRegion::ResizeS => "ns-resize",
            WindowRegion::ResizeE | WindowRegion::ResizeW => "ew-resize",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }
}
