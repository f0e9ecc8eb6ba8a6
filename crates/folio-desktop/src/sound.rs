//! Sound effects
//!
//! The shell decides *whether* a clip plays (mute gate); an [`AudioSink`]
//! decides *how*. Sinks restart the clip from the beginning on every
//! trigger and play it at the configured volume.

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// The short clips the page plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// A window was opened from the home layout
    Open,
    /// A window's close button was pressed
    Close,
    /// The pointer entered a skill chip
    Hover,
    /// Sound was switched back on
    MuteToggle,
}

impl SoundEffect {
    /// Get all sound effects
    pub fn all() -> &'static [SoundEffect] {
        &[
            SoundEffect::Open,
            SoundEffect::Close,
            SoundEffect::Hover,
            SoundEffect::MuteToggle,
        ]
    }

    /// Get the string ID for this effect
    pub fn id(&self) -> &'static str {
        match self {
            SoundEffect::Open => "open",
            SoundEffect::Close => "close",
            SoundEffect::Hover => "hover",
            SoundEffect::MuteToggle => "mute_toggle",
        }
    }

    /// Asset file name, relative to the asset root
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Open => "openSection.mp3",
            SoundEffect::Close => "close_button.mp3",
            SoundEffect::Hover => "button_sound.mp3",
            SoundEffect::MuteToggle => "mute_button.mp3",
        }
    }
}

/// Output for sound effects
pub trait AudioSink {
    /// Play a clip from its start
    ///
    /// Errors are reported, never retried; the shell logs and drops them.
    fn play(&mut self, effect: SoundEffect) -> FolioResult<()>;
}

/// Sink that plays nothing, for hosts without audio
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) -> FolioResult<()> {
        Ok(())
    }
}
