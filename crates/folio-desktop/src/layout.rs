//! Viewport and responsive layout mode
//!
//! The viewport is the browser's inner window size. Windows read it when
//! they open (initial position) and while dragging (clamping). Its width
//! also selects between the desktop and mobile animation variants.

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

/// Widest viewport (in CSS pixels) still treated as mobile
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Responsive layout selected from the viewport width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutMode {
    /// Layout for a viewport width; the breakpoint itself is mobile
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }
}

/// Current viewport state
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub size: Size,
    breakpoint: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(1920.0, 1080.0), MOBILE_BREAKPOINT)
    }
}

impl Viewport {
    /// Create a viewport with the given size and mobile breakpoint
    pub fn new(size: Size, breakpoint: f32) -> Self {
        Self { size, breakpoint }
    }

    /// Resize the viewport, returning the layout mode after the change
    pub fn resize(&mut self, size: Size) -> LayoutMode {
        self.size = size;
        self.layout_mode()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.size.width, self.breakpoint)
    }

    /// Point at a fraction of the viewport (e.g. a window's initial spot)
    pub fn fraction(&self, fraction: Vec2) -> Vec2 {
        self.size.fraction(fraction.x, fraction.y)
    }
}
