//! Desktop shell: icons, selection, taskbar and startup
//!
//! The shell holds the state that lives around the windows rather than in
//! them. It never touches the registry itself; the engine reads what the
//! shell decided (an icon was double-clicked, boot finished) and performs the
//! window operations.

mod icons;
mod startup;
mod taskbar;

pub use icons::{default_icons, DesktopIcon};
pub use startup::{BootPhase, StartupSequence};
pub use taskbar::{entries as taskbar_entries, TaskbarAction, TaskbarEntry};

use serde::{Deserialize, Serialize};
use crate::input::{ClickKind, ClickTracker, DOUBLE_CLICK_MS};
use crate::timer::{TimerSlot, TimerToken};
use crate::window::WindowId;

/// Shell timing and startup settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Two clicks on one icon at most this far apart open it
    pub double_click_ms: f64,
    /// A lone selection clears itself after this long
    pub selection_reset_ms: f64,
    /// How long the boot screen shows
    pub boot_duration_ms: f64,
    /// Applications launched once boot completes
    pub auto_launch: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            double_click_ms: DOUBLE_CLICK_MS,
            selection_reset_ms: 4000.0,
            boot_duration_ms: 2500.0,
            auto_launch: vec!["about".to_string()],
        }
    }
}

/// Result of clicking a desktop icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ClickOutcome {
    /// First click: the icon is now selected
    Selected(String),
    /// Second click in time: the application's window
    Opened(WindowId),
    /// Unknown icon or shell not interactive
    Ignored,
}

/// Something a shell timer decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellEvent {
    SelectionCleared,
    BootComplete,
}

/// Icon selection, double-click tracking and boot state
pub struct DesktopShell {
    config: ShellConfig,
    icons: Vec<DesktopIcon>,
    selected: Option<String>,
    clicks: ClickTracker<String>,
    selection_reset: TimerSlot<()>,
    startup: StartupSequence,
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl DesktopShell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            clicks: ClickTracker::new(config.double_click_ms),
            config,
            icons: default_icons(),
            selected: None,
            selection_reset: TimerSlot::new(),
            startup: StartupSequence::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    #[inline]
    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn icon(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Currently selected icon id
    #[inline]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[inline]
    pub fn boot_phase(&self) -> BootPhase {
        self.startup.phase()
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.startup.is_interactive()
    }

    /// Classify a click on an icon and update the selection
    ///
    /// A single click selects and arms the selection-reset timer, replacing
    /// any earlier one. A double click clears the selection and disarms it.
    /// Returns None for unknown icons and while booting.
    pub fn register_click(&mut self, icon_id: &str, now_ms: f64) -> Option<ClickKind> {
        if !self.is_interactive() || self.icon(icon_id).is_none() {
            return None;
        }

        let kind = self.clicks.click(icon_id.to_string(), now_ms);
        match kind {
            ClickKind::Single => {
                self.selected = Some(icon_id.to_string());
                self.selection_reset.schedule(now_ms + self.config.selection_reset_ms, ());
            }
            ClickKind::Double => {
                self.selected = None;
                self.selection_reset.cancel();
            }
        }
        Some(kind)
    }

    /// Drop the selection (click on empty desktop)
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.selection_reset.cancel();
        self.clicks.reset();
    }

    /// Show the boot screen starting at `now_ms`
    ///
    /// The returned token completes loading through [`Self::fire_boot`].
    pub fn begin_boot(&mut self, now_ms: f64) -> TimerToken {
        self.clear_selection();
        self.startup.begin(now_ms, self.config.boot_duration_ms)
    }

    /// Host timer callback for the boot screen; true if loading completed
    pub fn fire_boot(&mut self, token: TimerToken) -> bool {
        self.startup.fire(token)
    }

    /// Cut the boot screen short; true if one was showing
    pub fn skip_boot(&mut self) -> bool {
        self.startup.skip()
    }

    /// Fire every shell timer that is due
    ///
    /// Selection can only be armed while interactive and boot clears it, so
    /// the two timers are never due in the same tick out of order.
    pub fn tick(&mut self, now_ms: f64) -> Vec<ShellEvent> {
        let mut events = Vec::new();
        if self.selection_reset.poll(now_ms).is_some() {
            self.selected = None;
            events.push(ShellEvent::SelectionCleared);
        }
        if self.startup.poll(now_ms) {
            events.push(ShellEvent::BootComplete);
        }
        events
    }
}
