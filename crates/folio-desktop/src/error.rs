//! Error types for the portfolio shell
//!
//! Nothing in the window or clock state machines can fail. These errors
//! come from the edges: configuration parsing, asset loading, audio
//! playback and DOM construction. Callers log them and carry on.

use crate::sound::SoundEffect;

/// Errors that can occur at the edges of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// An image or audio asset could not be loaded
    AssetUnavailable(String),

    /// The environment refused to start playback (e.g. no user gesture yet)
    PlaybackBlocked(SoundEffect),

    /// A section id did not name a known window
    UnknownSection(String),

    /// A configuration value was rejected
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A DOM operation failed in the browser front end
    Dom(String),
}

impl std::fmt::Display for FolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetUnavailable(path) => write!(f, "asset unavailable: {}", path),
            Self::PlaybackBlocked(effect) => {
                write!(f, "playback blocked: {}", effect.id())
            }
            Self::UnknownSection(id) => write!(f, "unknown section: {}", id),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            field: "json",
            reason: err.to_string(),
        }
    }
}

/// Result type alias for fallible shell operations
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::AssetUnavailable("assets/close.png".to_string());
        assert_eq!(err.to_string(), "asset unavailable: assets/close.png");

        let err = FolioError::PlaybackBlocked(SoundEffect::Close);
        assert_eq!(err.to_string(), "playback blocked: close");

        let err = FolioError::UnknownSection("projects".to_string());
        assert_eq!(err.to_string(), "unknown section: projects");

        let err = FolioError::InvalidConfig {
            field: "sound_volume",
            reason: "must be within 0.0..=1.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config 'sound_volume': must be within 0.0..=1.0"
        );
    }

    #[test]
    fn test_json_error_maps_to_config_error() {
        let parse: Result<u32, _> = serde_json::from_str("{not json");
        let err: FolioError = parse.unwrap_err().into();
        assert!(matches!(err, FolioError::InvalidConfig { field: "json", .. }));
    }
}
