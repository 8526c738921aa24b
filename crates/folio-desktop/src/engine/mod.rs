//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and operations, with sound cues
//! - `input`: Pointer event handling and drag operations
//! - `shell`: Icon clicks, taskbar, launcher and boot
//! - `rendering`: Frame list handed to the host each frame

mod windows;
mod input;
mod shell;
mod rendering;

use crate::input::InputRouter;
use crate::math::Size;
use crate::shell::{DesktopShell, ShellConfig};
use crate::sound::{Silent, SoundCue, SoundSink};
use crate::viewport::{RenderSurface, Viewport};
use crate::window::WindowRegistry;

pub use rendering::WindowFrame;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window registry (window lifecycle, focus, z-order)
/// - Input router (drag/resize state machine)
/// - Desktop shell (icons, taskbar, boot sequence)
///
/// The rendering surface and the sound player are collaborators the host
/// supplies; the engine only asks the former for its size and tells the
/// latter which cue to play.
pub struct DesktopEngine {
    /// Window registry
    pub windows: WindowRegistry,
    /// Input router
    pub input: InputRouter,
    /// Desktop shell
    pub shell: DesktopShell,
    surface: Box<dyn RenderSurface>,
    sounds: Box<dyn SoundSink>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with a default viewport and no sound
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create an engine with custom shell settings
    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            windows: WindowRegistry::new(),
            input: InputRouter::new(),
            shell: DesktopShell::new(config),
            surface: Box::new(Viewport::default()),
            sounds: Box::new(Silent),
        }
    }

    /// Use `surface` for viewport queries from now on
    pub fn set_surface(&mut self, surface: Box<dyn RenderSurface>) {
        self.surface = surface;
    }

    /// Route sound cues to `sink` from now on
    pub fn set_sound_sink(&mut self, sink: Box<dyn SoundSink>) {
        self.sounds = sink;
    }

    /// Current size of the rendering surface
    #[inline]
    pub fn viewport(&self) -> Size {
        self.surface.viewport()
    }

    /// Play a cue, never letting a playback failure escape
    pub(crate) fn play(&mut self, cue: SoundCue) {
        if let Err(e) = self.sounds.play(cue) {
            tracing::warn!(cue = cue.name(), error = %e, "sound cue failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::SoundError;

    struct Broken;

    impl SoundSink for Broken {
        fn play(&mut self, _cue: SoundCue) -> Result<(), SoundError> {
            Err(SoundError::Unavailable("autoplay blocked".to_string()))
        }
    }

    #[test]
    fn test_engine_defaults() {
        let engine = DesktopEngine::new();
        assert!(engine.windows.is_empty());
        assert!(!engine.input.is_dragging());
        assert!((engine.viewport().width - 1280.0).abs() < 0.001);
    }

    #[test]
    fn test_failing_sound_sink_does_not_block_open() {
        let mut engine = DesktopEngine::new();
        engine.set_sound_sink(Box::new(Broken));

        let id = engine.launch_from_menu("snake");
        assert!(engine.windows.get(id).is_some());
        assert!(engine.close_window(id));
        assert!(engine.windows.is_empty());
    }

    #[test]
    fn test_surface_is_read_at_call_time() {
        let mut engine = DesktopEngine::new();
        engine.set_surface(Box::new(Viewport::new(1920.0, 1080.0)));
        assert!((engine.viewport().height - 1080.0).abs() < 0.001);
    }
}
