//! Window registry for lifecycle, focus, and z-order

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{OpenPolicy, Window, WindowConfig, WindowId, DEFAULT_WINDOW_SIZE};

/// Authoritative collection of open windows
///
/// Windows are kept in open order (the taskbar order). Stacking is decided
/// by `z_index`, allocated from `next_z`, which only ever moves forward.
pub struct WindowRegistry {
    /// Open windows in creation order
    windows: Vec<Window>,
    /// Next window ID
    next_id: u64,
    /// Next z-index value
    next_z: u64,
    /// Source for pseudo-random placement
    rng: SmallRng,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry with entropy-seeded placement
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Create an empty registry with deterministic placement
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            next_z: 1,
            rng,
        }
    }

    /// Drop every window and rewind the z-index counter
    ///
    /// Ids keep counting so a stale id can never address a new window.
    pub fn reset(&mut self) {
        self.windows.clear();
        self.next_z = 1;
    }

    /// Open a window and focus it
    ///
    /// With [`OpenPolicy::Singleton`] an existing window of the same
    /// application is restored and focused instead, and its id returned.
    pub fn open(&mut self, config: WindowConfig, policy: OpenPolicy, viewport: Size) -> WindowId {
        if policy == OpenPolicy::Singleton {
            if let Some(existing) = self.find_by_tag(&config.app_tag).map(|w| w.id) {
                self.focus(existing);
                tracing::debug!(window = %existing, app = %config.app_tag, "reused singleton window");
                return existing;
            }
        }

        let id = WindowId(self.next_id);
        self.next_id += 1;
        let z_index = self.take_z();

        let rect = match config.rect {
            Some(rect) => rect,
            None => self.random_rect(viewport),
        };

        for window in &mut self.windows {
            window.is_focused = false;
        }

        tracing::debug!(window = %id, app = %config.app_tag, z = z_index, "opened window");
        self.windows.push(Window {
            id,
            title: config.title,
            app_tag: config.app_tag,
            rect,
            z_index,
            is_focused: true,
            is_minimized: false,
            is_maximized: false,
            props: config.props,
            restore_rect: None,
        });

        id
    }

    /// Focus a window and raise it above every other window
    ///
    /// A minimized window is restored first. Returns false if `id` is unknown.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let already_top = self.windows[index].z_index == self.top_z();
        let z_index = if already_top { None } else { Some(self.take_z()) };

        for window in &mut self.windows {
            window.is_focused = window.id == id;
        }

        let window = &mut self.windows[index];
        window.is_minimized = false;
        if let Some(z) = z_index {
            window.z_index = z;
        }
        true
    }

    /// Remove a window for good
    ///
    /// If it held focus, the top-most remaining visible window takes over.
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let removed = self.windows.remove(index);
        tracing::debug!(window = %id, app = %removed.app_tag, "closed window");
        if removed.is_focused {
            self.focus_top_visible();
        }
        true
    }

    /// Flip the minimized flag
    pub fn toggle_minimize(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let window = &mut self.windows[index];
        window.is_minimized = !window.is_minimized;

        if window.is_minimized {
            if window.is_focused {
                window.is_focused = false;
                self.focus_top_visible();
            }
        } else if self.focused().is_none() {
            self.focus(id);
        }
        true
    }

    /// Flip the maximized flag
    ///
    /// `viewport` is the surface size at the moment of the toggle. Entering
    /// maximized mode remembers the current rectangle, leaving restores it.
    pub fn toggle_maximize(&mut self, id: WindowId, viewport: Size) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };

        if window.is_maximized {
            if let Some(rect) = window.restore_rect.take() {
                window.rect = rect;
            }
            window.is_maximized = false;
        } else {
            window.restore_rect = Some(window.rect);
            window.rect = maximized_rect(viewport);
            window.is_maximized = true;
        }
        true
    }

    /// Move a window's top-left corner
    pub fn move_to(&mut self, id: WindowId, position: Vec2) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.rect = window.rect.with_position(position);
        true
    }

    /// Replace a window's rectangle
    ///
    /// A manual resize always leaves maximized mode. No size limits are
    /// applied here; the resize handles clamp before calling in.
    pub fn resize(&mut self, id: WindowId, rect: Rect) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.rect = rect;
        window.is_maximized = false;
        window.restore_rect = None;
        true
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get the currently focused window ID
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// First open window for an application tag
    pub fn find_by_tag(&self, app_tag: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.app_tag == app_tag)
    }

    /// All windows in open order
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Visible windows back to front, i.e. render order
    pub fn visible_by_z(&self) -> Vec<&Window> {
        let mut windows = self.windows_by_z();
        windows.retain(|w| w.is_visible());
        windows
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Check whether no window is open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn top_z(&self) -> u64 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn focus_top_visible(&mut self) {
        let top = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id);

        if let Some(id) = top {
            self.focus(id);
        }
    }

    /// Default-sized rectangle somewhere fully on screen
    fn random_rect(&mut self, viewport: Size) -> Rect {
        let usable = usable_area(viewport);
        let size = DEFAULT_WINDOW_SIZE.min(usable);
        let max_x = (usable.width - size.width).max(0.0);
        let max_y = (usable.height - size.height).max(0.0);
        let x = self.rng.gen_range(0.0..=max_x);
        let y = self.rng.gen_range(0.0..=max_y);
        Rect::new(x, y, size.width, size.height)
    }
}

/// Surface area left above the taskbar
fn usable_area(viewport: Size) -> Size {
    Size::new(
        viewport.width.max(0.0),
        (viewport.height - FRAME_STYLE.taskbar_height).max(0.0),
    )
}

/// Full-viewport rectangle used while maximized
fn maximized_rect(viewport: Size) -> Rect {
    Rect::from_pos_size(Vec2::ZERO, usable_area(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    fn open_at(registry: &mut WindowRegistry, app: &str, rect: Rect) -> WindowId {
        registry.open(
            WindowConfig::new(app, app).with_rect(rect),
            OpenPolicy::AlwaysNew,
            VIEWPORT,
        )
    }

    fn open(registry: &mut WindowRegistry, app: &str) -> WindowId {
        registry.open(WindowConfig::new(app, app), OpenPolicy::AlwaysNew, VIEWPORT)
    }

    fn focused_count(registry: &WindowRegistry) -> usize {
        registry.iter().filter(|w| w.is_focused).count()
    }

    fn max_z(registry: &WindowRegistry) -> u64 {
        registry.iter().map(|w| w.z_index).max().unwrap()
    }

    #[test]
    fn test_open_assigns_unique_ids_and_increasing_z() {
        let mut registry = WindowRegistry::with_seed(1);
        let mut last_z = 0;
        let mut ids = Vec::new();

        for i in 0..20 {
            let id = open(&mut registry, &format!("app-{}", i % 3));
            let z = registry.get(id).unwrap().z_index;
            assert!(z > last_z);
            assert!(!ids.contains(&id));
            last_z = z;
            ids.push(id);
        }
        assert_eq!(registry.count(), 20);
    }

    #[test]
    fn test_open_focuses_new_window_only() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        let b = open(&mut registry, "b");

        assert_eq!(registry.focused(), Some(b));
        assert!(!registry.get(a).unwrap().is_focused);
        assert_eq!(focused_count(&registry), 1);
    }

    #[test]
    fn test_focus_scenario_raises_window() {
        let mut registry = WindowRegistry::with_seed(1);
        let w1 = open(&mut registry, "a");
        let w2 = open(&mut registry, "b");
        assert_eq!(registry.get(w1).unwrap().z_index, 1);
        assert_eq!(registry.get(w2).unwrap().z_index, 2);

        assert!(registry.focus(w1));

        let a = registry.get(w1).unwrap();
        let b = registry.get(w2).unwrap();
        assert!(a.is_focused);
        assert_eq!(a.z_index, 3);
        assert!(!b.is_focused);
        assert_eq!(b.z_index, 2);
    }

    #[test]
    fn test_focus_top_window_keeps_z() {
        let mut registry = WindowRegistry::with_seed(1);
        open(&mut registry, "a");
        let b = open(&mut registry, "b");

        registry.focus(b);
        registry.focus(b);
        assert_eq!(registry.get(b).unwrap().z_index, 2);
    }

    #[test]
    fn test_focus_leaves_exactly_one_focused_with_max_z() {
        let mut registry = WindowRegistry::with_seed(3);
        let ids: Vec<_> = (0..5).map(|i| open(&mut registry, &format!("app{}", i))).collect();

        for &id in [ids[2], ids[0], ids[4], ids[0], ids[3]].iter() {
            registry.focus(id);
            assert_eq!(focused_count(&registry), 1);
            assert_eq!(registry.get(id).unwrap().z_index, max_z(&registry));
        }
    }

    #[test]
    fn test_focus_unknown_id_is_noop() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");

        assert!(!registry.focus(WindowId(99)));
        assert_eq!(registry.focused(), Some(a));
    }

    #[test]
    fn test_maximize_roundtrip_restores_rect() {
        let mut registry = WindowRegistry::with_seed(1);
        let original = Rect::new(100.0, 100.0, 400.0, 300.0);
        let id = open_at(&mut registry, "a", original);

        registry.toggle_maximize(id, VIEWPORT);
        let window = registry.get(id).unwrap();
        assert!(window.is_maximized);
        assert_eq!(window.rect, Rect::new(0.0, 0.0, 1280.0, 760.0));
        assert_eq!(window.restore_rect(), Some(original));

        registry.toggle_maximize(id, VIEWPORT);
        let window = registry.get(id).unwrap();
        assert!(!window.is_maximized);
        assert_eq!(window.rect, original);
    }

    #[test]
    fn test_unmaximize_ignores_new_viewport() {
        let mut registry = WindowRegistry::with_seed(1);
        let original = Rect::new(100.0, 100.0, 400.0, 300.0);
        let id = open_at(&mut registry, "a", original);

        registry.toggle_maximize(id, VIEWPORT);
        registry.toggle_maximize(id, Size::new(640.0, 480.0));

        assert_eq!(registry.get(id).unwrap().rect, original);
    }

    #[test]
    fn test_resize_always_clears_maximize() {
        let mut registry = WindowRegistry::with_seed(1);
        let id = open_at(&mut registry, "a", Rect::new(10.0, 10.0, 400.0, 300.0));

        registry.toggle_maximize(id, VIEWPORT);
        let target = Rect::new(20.0, 30.0, 500.0, 350.0);
        registry.resize(id, target);

        let window = registry.get(id).unwrap();
        assert!(!window.is_maximized);
        assert_eq!(window.rect, target);
        assert!(window.restore_rect().is_none());

        registry.resize(id, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(!registry.get(id).unwrap().is_maximized);
    }

    #[test]
    fn test_registry_accepts_any_rect() {
        let mut registry = WindowRegistry::with_seed(1);
        let id = open(&mut registry, "a");

        registry.resize(id, Rect::new(-50.0, -50.0, 10.0, 10.0));
        assert_eq!(registry.get(id).unwrap().rect, Rect::new(-50.0, -50.0, 10.0, 10.0));
    }

    #[test]
    fn test_move_keeps_size() {
        let mut registry = WindowRegistry::with_seed(1);
        let id = open_at(&mut registry, "a", Rect::new(0.0, 0.0, 400.0, 300.0));

        registry.move_to(id, Vec2::new(250.0, 120.0));
        assert_eq!(registry.get(id).unwrap().rect, Rect::new(250.0, 120.0, 400.0, 300.0));
    }

    #[test]
    fn test_closed_window_cannot_be_touched() {
        let mut registry = WindowRegistry::with_seed(1);
        let keep = open(&mut registry, "a");
        let gone = open(&mut registry, "b");

        assert!(registry.close(gone));
        assert!(!registry.close(gone));
        assert!(!registry.focus(gone));
        assert!(!registry.toggle_minimize(gone));
        assert!(!registry.toggle_maximize(gone, VIEWPORT));
        assert!(!registry.move_to(gone, Vec2::ZERO));
        assert!(!registry.resize(gone, Rect::ZERO));

        assert!(registry.get(gone).is_none());
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.focused(), Some(keep));
    }

    #[test]
    fn test_reopen_after_close_gets_new_id() {
        let mut registry = WindowRegistry::with_seed(1);
        let first = open(&mut registry, "snake");
        registry.close(first);

        let second = registry.open(WindowConfig::new("snake", "Snake"), OpenPolicy::Singleton, VIEWPORT);
        assert_ne!(first, second);
    }

    #[test]
    fn test_z_index_is_never_reused() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        let b = open(&mut registry, "b");
        registry.close(a);
        registry.close(b);

        let c = open(&mut registry, "c");
        assert_eq!(registry.get(c).unwrap().z_index, 3);
    }

    #[test]
    fn test_close_focused_passes_focus_to_top_visible() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        let b = open(&mut registry, "b");
        let c = open(&mut registry, "c");
        registry.toggle_minimize(b);

        registry.close(c);

        assert_eq!(registry.focused(), Some(a));
        assert!(registry.get(b).unwrap().is_minimized);
    }

    #[test]
    fn test_minimize_focused_moves_focus() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        let b = open(&mut registry, "b");

        registry.toggle_minimize(b);

        let window = registry.get(b).unwrap();
        assert!(window.is_minimized);
        assert!(!window.is_focused);
        assert_eq!(registry.focused(), Some(a));
        assert_eq!(registry.get(a).unwrap().z_index, max_z(&registry));
    }

    #[test]
    fn test_minimize_last_visible_leaves_nothing_focused() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");

        registry.toggle_minimize(a);
        assert_eq!(registry.focused(), None);

        registry.toggle_minimize(a);
        assert_eq!(registry.focused(), Some(a));
        assert!(!registry.get(a).unwrap().is_minimized);
    }

    #[test]
    fn test_focus_restores_minimized_window() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        open(&mut registry, "b");
        registry.toggle_minimize(a);

        registry.focus(a);

        let window = registry.get(a).unwrap();
        assert!(window.is_focused);
        assert!(!window.is_minimized);
    }

    #[test]
    fn test_singleton_reuses_and_restores() {
        let mut registry = WindowRegistry::with_seed(1);
        let first = registry.open(WindowConfig::new("about", "About"), OpenPolicy::Singleton, VIEWPORT);
        open(&mut registry, "other");
        registry.toggle_minimize(first);

        let again = registry.open(WindowConfig::new("about", "About"), OpenPolicy::Singleton, VIEWPORT);

        assert_eq!(first, again);
        assert_eq!(registry.count(), 2);
        let window = registry.get(first).unwrap();
        assert!(window.is_focused);
        assert!(!window.is_minimized);
    }

    #[test]
    fn test_always_new_allows_duplicates() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = registry.open(WindowConfig::new("terminal", "Terminal"), OpenPolicy::AlwaysNew, VIEWPORT);
        let b = registry.open(WindowConfig::new("terminal", "Terminal"), OpenPolicy::AlwaysNew, VIEWPORT);

        assert_ne!(a, b);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_random_placement_stays_on_screen() {
        let mut registry = WindowRegistry::with_seed(42);
        for i in 0..50 {
            let id = open(&mut registry, &format!("app{}", i));
            let rect = registry.get(id).unwrap().rect;
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.right() <= VIEWPORT.width + 0.001);
            assert!(rect.bottom() <= VIEWPORT.height - FRAME_STYLE.taskbar_height + 0.001);
            assert!((rect.width - DEFAULT_WINDOW_SIZE.width).abs() < 0.001);
        }
    }

    #[test]
    fn test_random_placement_shrinks_on_small_viewport() {
        let mut registry = WindowRegistry::with_seed(7);
        let id = registry.open(WindowConfig::new("a", "A"), OpenPolicy::AlwaysNew, Size::new(320.0, 240.0));

        let rect = registry.get(id).unwrap().rect;
        assert!((rect.width - 320.0).abs() < 0.001);
        assert!((rect.height - 200.0).abs() < 0.001);
        assert!(rect.x.abs() < 0.001 && rect.y.abs() < 0.001);
    }

    #[test]
    fn test_seeded_placement_is_deterministic() {
        let mut a = WindowRegistry::with_seed(9);
        let mut b = WindowRegistry::with_seed(9);
        let ia = open(&mut a, "x");
        let ib = open(&mut b, "x");
        let ra = a.get(ia).unwrap().rect;
        let rb = b.get(ib).unwrap().rect;
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_visible_by_z_skips_minimized() {
        let mut registry = WindowRegistry::with_seed(1);
        let a = open(&mut registry, "a");
        let b = open(&mut registry, "b");
        let c = open(&mut registry, "c");
        registry.toggle_minimize(b);
        registry.focus(a);

        let order: Vec<WindowId> = registry.visible_by_z().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![c, a]);
    }

    #[test]
    fn test_reset_rewinds_z_but_never_reuses_ids() {
        let mut registry = WindowRegistry::with_seed(1);
        let first = open(&mut registry, "a");
        open(&mut registry, "b");

        registry.reset();
        assert!(registry.is_empty());

        let id = open(&mut registry, "c");
        assert_eq!(id, WindowId(3));
        assert!(registry.get(first).is_none());
        assert_eq!(registry.get(id).unwrap().z_index, 1);
    }
}
