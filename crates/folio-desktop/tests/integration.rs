//! Integration tests for DesktopEngine
//!
//! These tests drive the desktop the way the web front end does:
//! - Window lifecycle through icons, launcher and frame controls
//! - Focus and stacking under rapid interaction
//! - Maximize round trips against a changing viewport
//! - Gestures (drag, resize) committed on release
//! - Boot sequence and timer cancellation

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{
    ClickOutcome, ControlButton, CueQueue, DesktopEngine, InputResult, OpenPolicy, Rect, ShellEvent,
    SoundCue, SoundError, SoundSink, SurfaceView, Viewport, WindowConfig, WindowId, WindowRegistry,
};

fn engine() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.windows = WindowRegistry::with_seed(11);
    engine.set_surface(Box::new(Viewport::new(1280.0, 800.0)));
    engine
}

fn open_at(engine: &mut DesktopEngine, app: &str, rect: Rect) -> WindowId {
    engine.open_window(WindowConfig::new(app, app).with_rect(rect), OpenPolicy::AlwaysNew)
}

#[derive(Clone, Default)]
struct SharedQueue(Rc<RefCell<CueQueue>>);

impl SoundSink for SharedQueue {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        self.0.borrow_mut().play(cue)
    }
}

// =============================================================================
// Registry Properties
// =============================================================================

#[test]
fn test_open_sequence_ids_unique_and_z_increasing() {
    let mut engine = engine();
    let mut seen = Vec::new();
    let mut last_z = 0;

    for tag in ["about", "snake", "about", "terminal", "tetris", "snake", "calculator"] {
        let id = engine.launch_from_menu(tag);
        let z = engine.windows.get(id).unwrap().z_index;
        assert!(!seen.contains(&id));
        assert!(z > last_z);
        seen.push(id);
        last_z = z;
    }
}

#[test]
fn test_focus_scenario_w1_w2() {
    let mut engine = engine();
    let w1 = engine.launch_from_menu("about");
    let w2 = engine.launch_from_menu("snake");
    assert_eq!(w1.to_string(), "w1");
    assert_eq!(w2.to_string(), "w2");

    engine.focus_window(w1);

    let a = engine.windows.get(w1).unwrap();
    let b = engine.windows.get(w2).unwrap();
    assert!(a.is_focused);
    assert_eq!(a.z_index, 3);
    assert!(!b.is_focused);
    assert_eq!(b.z_index, 2);
}

#[test]
fn test_rapid_focus_changes_keep_single_top_window() {
    let mut engine = engine();
    let ids: Vec<_> = ["about", "snake", "tetris", "terminal"]
        .iter()
        .map(|tag| engine.launch_from_menu(tag))
        .collect();

    for i in 0..40 {
        let id = ids[(i * 7) % ids.len()];
        engine.focus_window(id);

        let focused: Vec<_> = engine.windows.iter().filter(|w| w.is_focused).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].id, id);
        let max_z = engine.windows.iter().map(|w| w.z_index).max().unwrap();
        assert_eq!(focused[0].z_index, max_z);
    }
}

#[test]
fn test_maximize_roundtrip_scenario() {
    let mut engine = engine();
    let id = open_at(&mut engine, "about", Rect::new(100.0, 100.0, 400.0, 300.0));

    engine.press_control(id, ControlButton::Maximize);
    assert_eq!(engine.windows.get(id).unwrap().rect, Rect::new(0.0, 0.0, 1280.0, 760.0));

    engine.press_control(id, ControlButton::Maximize);
    let window = engine.windows.get(id).unwrap();
    assert!(!window.is_maximized);
    assert_eq!(window.rect, Rect::new(100.0, 100.0, 400.0, 300.0));
}

#[test]
fn test_browser_resize_while_maximized_restores_original() {
    let mut engine = engine();
    let id = open_at(&mut engine, "about", Rect::new(100.0, 100.0, 400.0, 300.0));

    engine.toggle_maximize(id);
    engine.set_surface(Box::new(Viewport::new(1024.0, 600.0)));
    engine.toggle_maximize(id);

    assert_eq!(engine.windows.get(id).unwrap().rect, Rect::new(100.0, 100.0, 400.0, 300.0));
}

#[test]
fn test_resize_exits_maximize() {
    let mut engine = engine();
    let id = open_at(&mut engine, "about", Rect::new(100.0, 100.0, 400.0, 300.0));
    engine.toggle_maximize(id);

    engine.resize_window(id, Rect::new(50.0, 50.0, 600.0, 400.0));

    let window = engine.windows.get(id).unwrap();
    assert!(!window.is_maximized);
    assert_eq!(window.rect, Rect::new(50.0, 50.0, 600.0, 400.0));
}

#[test]
fn test_closed_window_ignores_everything() {
    let mut engine = engine();
    let keep = engine.launch_from_menu("about");
    let gone = engine.launch_from_menu("snake");
    engine.close_window(gone);

    assert!(!engine.focus_window(gone));
    assert!(!engine.close_window(gone));
    assert!(!engine.toggle_minimize(gone));
    assert!(!engine.toggle_maximize(gone));
    assert!(!engine.move_window(gone, 10.0, 10.0));
    assert!(!engine.resize_window(gone, Rect::new(0.0, 0.0, 500.0, 500.0)));
    assert!(!engine.taskbar_click(gone));
    assert!(!engine.begin_drag(gone, 0.0, 0.0));
    assert!(engine.surface_for(gone).is_none());

    assert_eq!(engine.windows.count(), 1);
    assert_eq!(engine.windows.focused(), Some(keep));
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_double_click_within_threshold_opens_exactly_once() {
    let mut engine = engine();
    engine.icon_click("icon-case-files", 1000.0);
    let outcome = engine.icon_click("icon-case-files", 1150.0);

    assert!(matches!(outcome, ClickOutcome::Opened(_)));
    assert_eq!(engine.windows.count(), 1);
}

#[test]
fn test_slow_double_click_is_two_selections() {
    let mut engine = engine();
    let first = engine.icon_click("icon-case-files", 1000.0);
    let second = engine.icon_click("icon-case-files", 1400.0);

    assert_eq!(first, ClickOutcome::Selected("icon-case-files".to_string()));
    assert_eq!(second, ClickOutcome::Selected("icon-case-files".to_string()));
    assert!(engine.windows.is_empty());
}

#[test]
fn test_icon_reuses_launcher_duplicates_asymmetry() {
    let mut engine = engine();
    let from_menu = engine.launch_from_menu("terminal");
    engine.launch_from_menu("terminal");
    assert_eq!(engine.windows.count(), 2);

    engine.icon_click("icon-terminal", 0.0);
    let outcome = engine.icon_click("icon-terminal", 100.0);

    assert_eq!(outcome, ClickOutcome::Opened(from_menu));
    assert_eq!(engine.windows.count(), 2);
    assert_eq!(engine.windows.focused(), Some(from_menu));
}

#[test]
fn test_icon_restores_minimized_singleton() {
    let mut engine = engine();
    engine.icon_click("icon-snake", 0.0);
    let ClickOutcome::Opened(id) = engine.icon_click("icon-snake", 100.0) else {
        panic!("expected the snake window to open");
    };
    engine.press_control(id, ControlButton::Minimize);
    assert_eq!(engine.windows.focused(), None);

    engine.icon_click("icon-snake", 5000.0);
    engine.icon_click("icon-snake", 5100.0);

    let window = engine.windows.get(id).unwrap();
    assert!(!window.is_minimized);
    assert!(window.is_focused);
}

#[test]
fn test_boot_then_skip_never_double_launches() {
    let mut engine = engine();
    engine.boot(0.0);
    assert!(engine.tick(1000.0).is_empty());
    assert!(engine.skip_boot());
    assert_eq!(engine.windows.count(), 1);

    assert!(engine.tick(2500.0).is_empty());
    assert!(engine.tick(100_000.0).is_empty());
    assert_eq!(engine.windows.count(), 1);
}

#[test]
fn test_selection_reset_fires_after_idle() {
    let mut engine = engine();
    engine.icon_click("icon-about", 0.0);
    assert_eq!(engine.shell.selected(), Some("icon-about"));

    assert_eq!(engine.tick(4000.0), vec![ShellEvent::SelectionCleared]);
    assert_eq!(engine.shell.selected(), None);
}

// =============================================================================
// Gesture Tests
// =============================================================================

#[test]
fn test_drag_then_resize_workflow() {
    let mut engine = engine();
    let id = open_at(&mut engine, "about", Rect::new(100.0, 100.0, 400.0, 300.0));

    assert_eq!(engine.pointer_down(300.0, 110.0), InputResult::Handled);
    engine.pointer_move(400.0, 210.0);
    engine.pointer_move(350.0, 160.0);
    engine.pointer_up();
    assert_eq!(engine.windows.get(id).unwrap().rect, Rect::new(150.0, 150.0, 400.0, 300.0));

    // bottom-right corner of the moved frame
    engine.pointer_down(548.0, 448.0);
    engine.pointer_move(648.0, 498.0);
    engine.pointer_up();
    assert_eq!(engine.windows.get(id).unwrap().rect, Rect::new(150.0, 150.0, 500.0, 350.0));
}

#[test]
fn test_resize_never_below_minimum() {
    let mut engine = engine();
    let id = open_at(&mut engine, "about", Rect::new(100.0, 100.0, 400.0, 300.0));

    // top-left corner dragged far inwards
    engine.pointer_down(101.0, 101.0);
    engine.pointer_move(900.0, 900.0);
    engine.pointer_up();

    let rect = engine.windows.get(id).unwrap().rect;
    assert_eq!(rect, Rect::new(200.0, 200.0, 300.0, 200.0));
}

#[test]
fn test_sound_cues_in_event_order() {
    let mut engine = engine();
    let queue = SharedQueue::default();
    engine.set_sound_sink(Box::new(queue.clone()));

    let a = engine.launch_from_menu("about");
    engine.launch_from_menu("snake");
    engine.focus_window(a);
    engine.close_window(a);

    assert_eq!(
        queue.0.borrow_mut().drain(),
        vec![SoundCue::WindowOpen, SoundCue::WindowOpen, SoundCue::WindowFocus, SoundCue::WindowClose]
    );
}

// =============================================================================
// Surface Tests
// =============================================================================

#[test]
fn test_unknown_app_renders_error_panel() {
    let mut engine = engine();
    let id = engine.launch_from_menu("defrag");

    match engine.surface_for(id) {
        Some(SurfaceView::UnknownApplication { tag, message }) => {
            assert_eq!(tag, "defrag");
            assert!(message.contains("defrag"));
        }
        other => panic!("expected error panel, got {:?}", other),
    }
}

#[test]
fn test_frames_json_shape() {
    let mut engine = engine();
    open_at(&mut engine, "snake", Rect::new(10.0, 20.0, 400.0, 300.0));

    let json = serde_json::to_value(engine.frames()).unwrap();
    let frame = &json[0];
    assert_eq!(frame["id"], 1);
    assert_eq!(frame["appTag"], "snake");
    assert_eq!(frame["isFocused"], true);
    assert_eq!(frame["rect"]["x"], 10.0);
    assert_eq!(frame["view"]["view"], "app");
}
