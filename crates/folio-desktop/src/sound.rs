//! UI sound cues
//!
//! The window manager only names the cue; synthesis and playback belong to
//! the host. Playback is fire-and-forget: a sink error is logged and the
//! state transition that triggered it stands.

use serde::Serialize;

/// Named UI sound effect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    WindowOpen,
    WindowClose,
    WindowMinimize,
    WindowMaximize,
    WindowRestore,
    WindowFocus,
    IconSelect,
    BootComplete,
}

impl SoundCue {
    /// Name used on the host side
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::WindowOpen => "window-open",
            SoundCue::WindowClose => "window-close",
            SoundCue::WindowMinimize => "window-minimize",
            SoundCue::WindowMaximize => "window-maximize",
            SoundCue::WindowRestore => "window-restore",
            SoundCue::WindowFocus => "window-focus",
            SoundCue::IconSelect => "icon-select",
            SoundCue::BootComplete => "boot-complete",
        }
    }
}

/// Why a cue could not be played
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    /// Audio is not available (muted, no context, autoplay blocked)
    #[error("audio unavailable: {0}")]
    Unavailable(String),
    /// The host player rejected the cue
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Something that can play cues
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError>;
}

/// Sink that drops every cue
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Sink that buffers cues for the host to drain once per frame
#[derive(Clone, Debug, Default)]
pub struct CueQueue {
    cues: Vec<SoundCue>,
}

impl CueQueue {
    /// Take every buffered cue in the order it was played
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}

impl SoundSink for CueQueue {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        self.cues.push(cue);
        Ok(())
    }
}
