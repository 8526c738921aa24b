//! Boot sequence

use serde::Serialize;
use crate::timer::{TimerSlot, TimerToken};

/// Where the desktop is in its startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BootPhase {
    /// Boot never started; the desktop is usable as-is
    #[default]
    Off,
    /// Boot screen showing, loading-complete timer armed
    Booting,
    /// Boot finished
    Ready,
}

/// Boot screen state with its deferred loading-complete transition
#[derive(Clone, Debug, Default)]
pub struct StartupSequence {
    phase: BootPhase,
    loading: TimerSlot<()>,
}

impl StartupSequence {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Check if the desktop is accepting interaction
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.phase != BootPhase::Booting
    }

    /// Enter the boot screen; loading completes at `now_ms + duration_ms`
    pub fn begin(&mut self, now_ms: f64, duration_ms: f64) -> TimerToken {
        self.phase = BootPhase::Booting;
        self.loading.schedule(now_ms + duration_ms, ())
    }

    /// Complete loading if the deadline has passed
    ///
    /// Returns true exactly once, on the transition into `Ready`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.loading.poll(now_ms).is_some() {
            self.phase = BootPhase::Ready;
            return true;
        }
        false
    }

    /// Host timer callback for `token`; stale tokens are ignored
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.loading.fire(token).is_some() {
            self.phase = BootPhase::Ready;
            return true;
        }
        false
    }

    /// Jump straight to `Ready`, disarming the pending transition
    ///
    /// Returns true if a boot was actually in progress.
    pub fn skip(&mut self) -> bool {
        if self.phase != BootPhase::Booting {
            return false;
        }
        self.loading.cancel();
        self.phase = BootPhase::Ready;
        true
    }
}
