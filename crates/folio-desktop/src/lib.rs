//! Window manager and desktop shell for Folio OS
//!
//! This crate owns the state machines behind the portfolio desktop:
//! - Window registry (open, close, focus, z-order, minimize, maximize)
//! - Gesture handling (drag and resize with live previews)
//! - Desktop shell (icons with double-click detection, taskbar, boot)
//! - Application surface dispatch (tag to view, total over strings)
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`) and frame metrics
//! - [`window`]: Window records, the registry and hit testing
//! - [`input`]: Drag state machine and click classification
//! - [`shell`]: Icons, taskbar entries, boot sequence
//! - [`surface`]: Application table and view resolution
//! - [`timer`]: Cancellable deferred actions
//! - [`sound`]: Sound cue names and the sink trait
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopEngine, OpenPolicy, Rect, WindowConfig};
//!
//! let mut engine = DesktopEngine::new();
//! let id = engine.open_window(
//!     WindowConfig::new("about", "About Me").with_rect(Rect::new(100.0, 100.0, 400.0, 300.0)),
//!     OpenPolicy::Singleton,
//! );
//! engine.toggle_maximize(id);
//! assert!(engine.windows.get(id).unwrap().is_maximized);
//! ```
//!
//! Nothing here touches the browser. Time is passed in as `now_ms` and the
//! viewport and sound player are traits, so every state machine runs under
//! plain `cargo test`.

pub mod math;
pub mod window;
pub mod input;
pub mod shell;
pub mod surface;
pub mod timer;
pub mod sound;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE, MIN_WINDOW_SIZE};
pub use window::{ControlButton, OpenPolicy, Props, Window, WindowConfig, WindowId, WindowRegion, WindowRegistry};
pub use input::{ClickKind, ClickTracker, DragState, InputResult, InputRouter, DOUBLE_CLICK_MS};
pub use shell::{BootPhase, ClickOutcome, DesktopIcon, DesktopShell, ShellConfig, ShellEvent, TaskbarEntry};
pub use surface::{AppDescriptor, AppKind, SurfaceView, APPLICATIONS};
pub use timer::{TimerSlot, TimerToken};
pub use sound::{CueQueue, Silent, SoundCue, SoundError, SoundSink};

pub use engine::{DesktopEngine, WindowFrame};
pub use viewport::{RenderSurface, Viewport};
