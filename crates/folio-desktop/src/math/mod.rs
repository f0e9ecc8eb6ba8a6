//! Core geometry types for the floating windows
//!
//! These types provide the basic 2D math the drag and layout code
//! needs: positions, sizes, rectangles and viewport clamping.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;

/// Clamp a window's top-left so its whole box stays inside the viewport.
///
/// Each axis is limited to `[0, viewport - box]`. When the box is larger
/// than the viewport on an axis the lower bound wins and the window is
/// pinned to `0` on that axis.
pub fn clamp_to_viewport(position: Vec2, box_size: Size, viewport: Size) -> Vec2 {
    let max_x = viewport.width - box_size.width;
    let max_y = viewport.height - box_size.height;
    Vec2::new(
        position.x.min(max_x).max(0.0),
        position.y.min(max_y).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let pos = clamp_to_viewport(
            Vec2::new(100.0, 50.0),
            Size::new(200.0, 100.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_clamp_each_edge() {
        let box_size = Size::new(200.0, 100.0);
        let viewport = Size::new(800.0, 600.0);

        assert_eq!(
            clamp_to_viewport(Vec2::new(-30.0, -5.0), box_size, viewport),
            Vec2::new(0.0, 0.0)
        );
        assert_eq!(
            clamp_to_viewport(Vec2::new(750.0, 580.0), box_size, viewport),
            Vec2::new(600.0, 500.0)
        );
    }

    #[test]
    fn test_clamp_oversized_box_pins_to_origin() {
        let pos = clamp_to_viewport(
            Vec2::new(40.0, 40.0),
            Size::new(1000.0, 100.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 40.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A clamped box always lies inside the viewport when it fits
        #[test]
        fn clamped_box_stays_inside(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            bw in 1.0f32..800.0,
            bh in 1.0f32..600.0,
        ) {
            let viewport = Size::new(800.0, 600.0);
            let pos = clamp_to_viewport(Vec2::new(x, y), Size::new(bw, bh), viewport);
            let rect = Rect::from_pos_size(pos, Size::new(bw, bh));
            prop_assert!(rect.fits_within(viewport), "{:?} escapes {:?}", rect, viewport);
        }

        /// Clamping never produces a negative coordinate
        #[test]
        fn clamped_origin_non_negative(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            bw in 1.0f32..3000.0,
            bh in 1.0f32..3000.0,
        ) {
            let pos = clamp_to_viewport(Vec2::new(x, y), Size::new(bw, bh), Size::new(800.0, 600.0));
            prop_assert!(pos.x >= 0.0);
            prop_assert!(pos.y >= 0.0);
        }
    }
}
