//! Frame list handed to the host for rendering

use serde::Serialize;
use crate::math::Rect;
use crate::surface::{resolve, SurfaceView};
use crate::window::{Window, WindowId};
use super::DesktopEngine;

/// One visible window as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub id: WindowId,
    pub title: String,
    pub app_tag: String,
    /// Where to draw the frame; the drag preview while a gesture is live
    pub rect: Rect,
    pub z_index: u64,
    pub is_focused: bool,
    pub is_maximized: bool,
    /// Whether resize handles should be drawn
    pub resizable: bool,
    /// What goes inside the frame
    pub view: SurfaceView,
}

impl DesktopEngine {
    /// Visible windows back to front
    pub fn frames(&self) -> Vec<WindowFrame> {
        self.windows
            .visible_by_z()
            .into_iter()
            .map(|w| self.frame_for(w))
            .collect()
    }

    /// Content view for a single window
    pub fn surface_for(&self, id: WindowId) -> Option<SurfaceView> {
        self.windows.get(id).map(|w| resolve(&w.app_tag, &w.props))
    }

    fn frame_for(&self, w: &Window) -> WindowFrame {
        let rect = match self.input.drag_state() {
            Some(drag) if drag.window_id() == w.id => drag.preview(),
            _ => w.rect,
        };

        WindowFrame {
            id: w.id,
            title: w.title.clone(),
            app_tag: w.app_tag.clone(),
            rect,
            z_index: w.z_index,
            is_focused: w.is_focused,
            is_maximized: w.is_maximized,
            resizable: !w.is_maximized,
            view: resolve(&w.app_tag, &w.props),
        }
    }
}
