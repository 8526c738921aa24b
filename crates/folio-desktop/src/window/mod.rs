//! Window records and the registry that owns them
//!
//! The registry is the only place window state changes. Everything else
//! (the engine, the shell, the wasm controller) reads windows through shared
//! references and mutates them through registry operations.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod registry;

pub use window::{Props, Window};
pub use config::{OpenPolicy, WindowConfig, DEFAULT_WINDOW_SIZE};
pub use region::{ControlButton, WindowRegion};
pub use registry::WindowRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique window identifier
///
/// Allocated by the registry from a counter that is never rewound, so a
/// closed window's id is never handed out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}
