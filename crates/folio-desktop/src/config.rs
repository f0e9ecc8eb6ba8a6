//! Shell configuration
//!
//! Every tunable the page uses, with defaults matching the site as
//! shipped. Hosts may override any subset through JSON; missing fields
//! keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::layout::MOBILE_BREAKPOINT;
use crate::types::ZIndex;
use crate::wave::WaveOptions;

/// Duration of the window enter animation in milliseconds
pub const ENTER_DURATION_MS: f32 = 300.0;

/// Duration of the window exit animation in milliseconds
pub const EXIT_DURATION_MS: f32 = 250.0;

/// Playback volume for every sound effect
pub const SOUND_VOLUME: f32 = 0.08;

/// Base of the shared z-order counter
pub const INITIAL_Z_INDEX: ZIndex = 1000;

/// Runtime configuration for the shell and its front end
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Widest viewport still treated as mobile
    pub mobile_breakpoint: f32,
    /// Base of the shared z-order counter
    pub initial_z_index: ZIndex,
    /// Playback volume for sound effects (0.0..=1.0)
    pub sound_volume: f32,
    /// Window enter animation duration
    pub enter_duration_ms: f32,
    /// Window exit animation duration
    pub exit_duration_ms: f32,
    /// Clock refresh interval
    pub clock_tick_ms: u32,
    /// Clock hand transition between samples
    pub hand_transition_ms: u32,
    /// Wave decoration shape and speed
    pub wave: WaveOptions,
    /// Directory (relative to the page) holding images and sounds
    pub asset_root: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            initial_z_index: INITIAL_Z_INDEX,
            sound_volume: SOUND_VOLUME,
            enter_duration_ms: ENTER_DURATION_MS,
            exit_duration_ms: EXIT_DURATION_MS,
            clock_tick_ms: 1000,
            hand_transition_ms: 300,
            wave: WaveOptions::default(),
            asset_root: "assets".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the shell cannot work with
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.sound_volume) {
            return Err(invalid("sound_volume", "must be within 0.0..=1.0"));
        }
        if self.mobile_breakpoint < 0.0 {
            return Err(invalid("mobile_breakpoint", "must not be negative"));
        }
        if self.enter_duration_ms <= 0.0 || self.exit_duration_ms <= 0.0 {
            return Err(invalid("duration_ms", "animation durations must be positive"));
        }
        if self.clock_tick_ms == 0 {
            return Err(invalid("clock_tick_ms", "must be positive"));
        }
        if self.wave.points == 0 {
            return Err(invalid("wave.points", "at least one wave point is required"));
        }
        Ok(())
    }

    /// Path of a named asset under the asset root
    pub fn asset_path(&self, name: &str) -> String {
        format!("{}/{}", self.asset_root.trim_end_matches('/'), name)
    }
}

fn invalid(field: &'static str, reason: &str) -> FolioError {
    FolioError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_z_index, 1000);
        assert!((config.mobile_breakpoint - 768.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FolioConfig::from_json(r#"{ "sound_volume": 0.5 }"#).unwrap();
        assert!((config.sound_volume - 0.5).abs() < 0.001);
        assert_eq!(config.initial_z_index, INITIAL_Z_INDEX);
        assert_eq!(config.asset_root, "assets");
    }

    #[test]
    fn test_rejects_bad_volume() {
        let err = FolioConfig::from_json(r#"{ "sound_volume": 3.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            FolioError::InvalidConfig { field: "sound_volume", .. }
        ));
    }

    #[test]
    fn test_rejects_zero_wave_points() {
        let err = FolioConfig::from_json(r#"{ "wave": { "points": 0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig { field: "wave.points", .. }));
    }

    #[test]
    fn test_asset_path() {
        let mut config = FolioConfig::default();
        assert_eq!(config.asset_path("close.png"), "assets/close.png");
        config.asset_root = "/static/".to_string();
        assert_eq!(config.asset_path("close.png"), "/static/close.png");
    }
}
