//! Window record and frame geometry

use serde::Serialize;
use crate::math::{Rect, FRAME_STYLE};
use super::WindowId;

/// Opaque configuration bag handed through to the application surface
pub type Props = serde_json::Map<String, serde_json::Value>;

/// One open application instance
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Selects the application surface rendered inside the frame
    pub app_tag: String,
    /// Current rectangle (the computed full-viewport one while maximized)
    pub rect: Rect,
    /// Stacking key, higher draws on top
    pub z_index: u64,
    pub is_focused: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Passed through untouched to the application surface
    pub props: Props,
    /// Rectangle to return to when leaving maximized mode
    #[serde(skip)]
    pub(crate) restore_rect: Option<Rect>,
}

impl Window {
    /// Minimized windows are kept in the registry but never rendered
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Rectangle that un-maximizing will restore
    pub fn restore_rect(&self) -> Option<Rect> {
        self.restore_rect
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.rect.width, FRAME_STYLE.title_bar_height)
    }

    /// Get the content area rectangle (excludes title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y + FRAME_STYLE.title_bar_height,
            self.rect.width,
            (self.rect.height - FRAME_STYLE.title_bar_height).max(0.0),
        )
    }

    /// Close button, rightmost in the title bar
    pub fn close_button_rect(&self) -> Rect {
        self.title_button_rect(0)
    }

    /// Maximize button, left of close
    pub fn maximize_button_rect(&self) -> Rect {
        self.title_button_rect(1)
    }

    /// Minimize button, left of maximize
    pub fn minimize_button_rect(&self) -> Rect {
        self.title_button_rect(2)
    }

    /// `slot` counts buttons from the right edge of the title bar
    fn title_button_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.rect.right()
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.rect.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }
}
