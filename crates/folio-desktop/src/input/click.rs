//! Double-click detection

/// Default time window in which a second click counts as a double click
pub const DOUBLE_CLICK_MS: f64 = 300.0;

/// How a click was classified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Classifies clicks on targets of type `K` by timing
///
/// A double click consumes both clicks: a third quick click starts a new
/// sequence instead of producing a second double.
#[derive(Clone, Debug)]
pub struct ClickTracker<K> {
    threshold_ms: f64,
    last: Option<(K, f64)>,
}

impl<K: PartialEq> ClickTracker<K> {
    /// Tracker with a custom double-click window
    pub fn new(threshold_ms: f64) -> Self {
        Self { threshold_ms, last: None }
    }

    /// Record a click on `target` at `now_ms`
    pub fn click(&mut self, target: K, now_ms: f64) -> ClickKind {
        let is_double = matches!(
            &self.last,
            Some((prev, at)) if *prev == target && now_ms - at <= self.threshold_ms
        );

        if is_double {
            self.last = None;
            ClickKind::Double
        } else {
            self.last = Some((target, now_ms));
            ClickKind::Single
        }
    }

    /// Forget the pending first click
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<K: PartialEq> Default for ClickTracker<K> {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_MS)
    }
}
