use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the whole rectangle lies inside a viewport anchored at the origin
    pub fn fits_within(&self, viewport: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= viewport.width + f32::EPSILON * viewport.width.max(1.0)
            && self.bottom() <= viewport.height + f32::EPSILON * viewport.height.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_fits_within() {
        let viewport = Size::new(800.0, 600.0);
        let full = Size::new(800.0, 600.0);
        assert!(Rect::from_pos_size(Vec2::ZERO, full).fits_within(viewport));
        assert!(!Rect::from_pos_size(Vec2::new(1.0, 0.0), full).fits_within(viewport));
        assert!(!Rect::from_pos_size(Vec2::new(-1.0, 0.0), Size::new(10.0, 10.0)).fits_within(viewport));

        let rect = Rect::from_pos_size(Vec2::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }
}
