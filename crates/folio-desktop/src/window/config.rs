//! Window configuration for creation

use crate::math::{Rect, Size};
use super::Props;

/// Size used when the caller supplies no rectangle
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(640.0, 480.0);

/// Configuration for opening a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Application tag routed to the surface dispatcher
    pub app_tag: String,
    /// Initial rectangle (None = pseudo-random on-screen placement)
    pub rect: Option<Rect>,
    /// Opaque props for the application surface
    pub props: Props,
}

impl WindowConfig {
    /// Config for `app_tag` with a title and no placement preference
    pub fn new(app_tag: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            app_tag: app_tag.into(),
            ..Default::default()
        }
    }

    /// Place the window at a fixed rectangle
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Attach surface props
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

/// Whether opening an application may reuse an existing window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenPolicy {
    /// Focus and restore the existing window of the same application if any
    Singleton,
    /// Always create a fresh window
    #[default]
    AlwaysNew,
}
