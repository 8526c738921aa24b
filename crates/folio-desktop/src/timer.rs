//! Cancellable deferred actions
//!
//! The host owns the real clock (`setTimeout`, animation frames). This side
//! only keeps the bookkeeping: a slot holds at most one pending action, each
//! scheduling hands out a fresh [`TimerToken`], and only the newest token can
//! ever fire. A callback that arrives for a superseded token does nothing.

/// Handle identifying one scheduling of a [`TimerSlot`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Raw value for passing through the host boundary
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild a token handed back by the host
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Debug)]
struct Pending<T> {
    token: TimerToken,
    due_ms: f64,
    payload: T,
}

/// Single-occupancy timer slot
#[derive(Clone, Debug)]
pub struct TimerSlot<T> {
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSlot<T> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self { generation: 0, pending: None }
    }

    /// Arm the slot, replacing whatever was pending
    pub fn schedule(&mut self, due_ms: f64, payload: T) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(Pending { token, due_ms, payload });
        token
    }

    /// Disarm the slot
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Check whether anything is armed
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Check whether `token` is the one currently armed
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.pending.as_ref().is_some_and(|p| p.token == token)
    }

    /// Deadline of the armed action
    pub fn due_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    /// Take the payload if `token` is still current, regardless of deadline
    pub fn fire(&mut self, token: TimerToken) -> Option<T> {
        if !self.is_current(token) {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }

    /// Take the payload if the armed deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_ms => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }
}
