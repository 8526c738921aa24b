//! Icon clicks, taskbar, launcher and boot sequence

use crate::input::ClickKind;
use crate::shell::{taskbar_entries, ClickOutcome, ShellEvent, TaskbarAction, TaskbarEntry};
use crate::sound::SoundCue;
use crate::timer::TimerToken;
use crate::window::{OpenPolicy, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle a click on a desktop icon at `now_ms`
    ///
    /// The second click on the same icon within the double-click window
    /// opens its application, reusing an open window of that application.
    pub fn icon_click(&mut self, icon_id: &str, now_ms: f64) -> ClickOutcome {
        let Some(app_tag) = self.shell.icon(icon_id).map(|icon| icon.app_tag.clone()) else {
            return ClickOutcome::Ignored;
        };

        match self.shell.register_click(icon_id, now_ms) {
            Some(ClickKind::Single) => {
                self.play(SoundCue::IconSelect);
                ClickOutcome::Selected(icon_id.to_string())
            }
            Some(ClickKind::Double) => ClickOutcome::Opened(self.open_app(&app_tag, OpenPolicy::Singleton)),
            None => ClickOutcome::Ignored,
        }
    }

    /// Handle a click on bare desktop
    pub fn desktop_click(&mut self) {
        self.shell.clear_selection();
    }

    /// Taskbar buttons in open order
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        taskbar_entries(&self.windows)
    }

    /// Handle a click on a taskbar button
    pub fn taskbar_click(&mut self, id: WindowId) -> bool {
        let action = match self.windows.get(id) {
            Some(window) => TaskbarAction::for_window(window),
            None => return false,
        };

        match action {
            TaskbarAction::Restore => self.toggle_minimize(id) && self.focus_window(id),
            TaskbarAction::Minimize => self.toggle_minimize(id),
            TaskbarAction::Focus => self.focus_window(id),
        }
    }

    /// Launch an application from the start menu, always in a new window
    pub fn launch_from_menu(&mut self, tag: &str) -> WindowId {
        self.open_app(tag, OpenPolicy::AlwaysNew)
    }

    /// Show the boot screen
    ///
    /// Loading completes on the first `tick` past the deadline, or when the
    /// host's own timer hands the returned token to [`Self::complete_boot`].
    pub fn boot(&mut self, now_ms: f64) -> TimerToken {
        tracing::debug!(now_ms, "boot started");
        self.shell.begin_boot(now_ms)
    }

    /// Finish loading for `token`; stale or already-fired tokens do nothing
    pub fn complete_boot(&mut self, token: TimerToken) -> bool {
        if !self.shell.fire_boot(token) {
            return false;
        }
        self.finish_boot();
        true
    }

    /// Cut the boot screen short and go straight to the desktop
    ///
    /// The pending loading-complete timer is disarmed, so a later `tick`
    /// cannot run the startup launches a second time.
    pub fn skip_boot(&mut self) -> bool {
        if !self.shell.skip_boot() {
            return false;
        }
        self.finish_boot();
        true
    }

    /// Advance every shell timer to `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> Vec<ShellEvent> {
        let events = self.shell.tick(now_ms);
        for event in &events {
            if *event == ShellEvent::BootComplete {
                self.finish_boot();
            }
        }
        events
    }

    fn finish_boot(&mut self) {
        self.play(SoundCue::BootComplete);
        let launches = self.shell.config().auto_launch.clone();
        for tag in &launches {
            self.open_app(tag, OpenPolicy::AlwaysNew);
        }
        tracing::debug!(launched = launches.len(), "boot complete");
    }
}
