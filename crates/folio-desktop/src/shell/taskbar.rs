//! Taskbar entries and click behavior

use serde::Serialize;
use crate::window::{Window, WindowId, WindowRegistry};

/// One button on the taskbar
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub app_tag: String,
    pub is_focused: bool,
    pub is_minimized: bool,
}

impl From<&Window> for TaskbarEntry {
    fn from(w: &Window) -> Self {
        Self {
            id: w.id,
            title: w.title.clone(),
            app_tag: w.app_tag.clone(),
            is_focused: w.is_focused,
            is_minimized: w.is_minimized,
        }
    }
}

/// What clicking a taskbar button does to its window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskbarAction {
    /// Minimized: bring it back and focus it
    Restore,
    /// Already in front: get it out of the way
    Minimize,
    /// Visible but behind something: raise it
    Focus,
}

impl TaskbarAction {
    pub fn for_window(window: &Window) -> Self {
        if window.is_minimized {
            TaskbarAction::Restore
        } else if window.is_focused {
            TaskbarAction::Minimize
        } else {
            TaskbarAction::Focus
        }
    }
}

/// Taskbar contents in open order
pub fn entries(registry: &WindowRegistry) -> Vec<TaskbarEntry> {
    registry.iter().map(TaskbarEntry::from).collect()
}
