use crate::math::Vec2;

/// Per-kind window parameters
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Title shown in the drag bar
    pub title: &'static str,
    /// Label on the home-layout button that opens the window
    pub button_label: &'static str,
    /// Home-layout button icon
    pub button_icon: &'static str,
    /// Initial top-left as a fraction of the viewport
    pub initial_fraction: Vec2,
    /// Stylesheet class of the window box
    pub box_class: &'static str,
    /// Whether hovering the window's chips plays the hover sound
    pub hover_sound: bool,
}

pub(super) static ABOUT_ME: WindowConfig = WindowConfig {
    title: "About Me",
    button_label: "About Me",
    button_icon: "about.png",
    initial_fraction: Vec2::new(0.1, 0.1),
    box_class: "about-me-box",
    hover_sound: false,
};

pub(super) static WORK: WindowConfig = WindowConfig {
    title: "Work",
    button_label: "Work",
    button_icon: "work.png",
    initial_fraction: Vec2::new(0.4, 0.1),
    box_class: "work-box",
    hover_sound: false,
};

pub(super) static TOOLS: WindowConfig = WindowConfig {
    title: "Tools",
    button_label: "Tools",
    button_icon: "tools.png",
    initial_fraction: Vec2::new(0.5, 0.1),
    box_class: "popup-box",
    hover_sound: true,
};
