use serde::{Deserialize, Serialize};

use super::config::{WindowConfig, ABOUT_ME, TOOLS, WORK};

/// The floating windows the home layout can open
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    AboutMe,
    Work,
    Tools,
}

impl WindowKind {
    /// Number of window kinds
    pub const COUNT: usize = 3;

    /// Get all window kinds, in home-button order
    pub fn all() -> &'static [WindowKind] {
        &[WindowKind::AboutMe, WindowKind::Work, WindowKind::Tools]
    }

    /// Slot of this kind in per-kind arrays
    pub fn index(&self) -> usize {
        match self {
            WindowKind::AboutMe => 0,
            WindowKind::Work => 1,
            WindowKind::Tools => 2,
        }
    }

    /// Get the string ID for this kind
    pub fn id(&self) -> &'static str {
        match self {
            WindowKind::AboutMe => "about_me",
            WindowKind::Work => "work",
            WindowKind::Tools => "tools",
        }
    }

    /// Parse from string ID (e.g., "about_me", "work", "tools")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "about_me" | "about" => Some(WindowKind::AboutMe),
            "work" => Some(WindowKind::Work),
            "tools" => Some(WindowKind::Tools),
            _ => None,
        }
    }

    /// Static configuration for this kind
    pub fn config(&self) -> &'static WindowConfig {
        match self {
            WindowKind::AboutMe => &ABOUT_ME,
            WindowKind::Work => &WORK,
            WindowKind::Tools => &TOOLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_cover_slots() {
        let mut seen = [false; WindowKind::COUNT];
        for kind in WindowKind::all() {
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_id_round_trip() {
        for kind in WindowKind::all() {
            assert_eq!(WindowKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(WindowKind::from_id("About"), Some(WindowKind::AboutMe));
        assert_eq!(WindowKind::from_id("projects"), None);
    }
}
