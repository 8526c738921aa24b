//! Desktop icons

use serde::Serialize;
use crate::math::Vec2;
use crate::surface::{AppDescriptor, APPLICATIONS};

/// Vertical distance between icons in the desktop column
const ICON_SPACING: f32 = 96.0;
/// Distance from the top-left corner of the desktop
const ICON_MARGIN: f32 = 24.0;

/// An icon on the desktop that launches an application
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub app_tag: String,
    pub position: Vec2,
}

impl DesktopIcon {
    /// Icon for an application at the given column slot
    pub fn for_app(app: &AppDescriptor, slot: usize) -> Self {
        Self {
            id: format!("icon-{}", app.tag),
            label: app.title.to_string(),
            app_tag: app.tag.to_string(),
            position: Vec2::new(ICON_MARGIN, ICON_MARGIN + slot as f32 * ICON_SPACING),
        }
    }
}

/// One icon per known application, stacked down the left edge
pub fn default_icons() -> Vec<DesktopIcon> {
    APPLICATIONS
        .iter()
        .enumerate()
        .map(|(slot, app)| DesktopIcon::for_app(app, slot))
        .collect()
}
