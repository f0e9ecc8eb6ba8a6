//! Decorative wave band along the bottom of the page
//!
//! The wave is a row of `points + 1` control points bobbing on sine
//! curves with staggered phases, joined by horizontal-tangent cubic
//! segments and closed along the bottom edge of its box.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Shape and speed of the wave
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveOptions {
    /// Resting height of the crest line from the top of the box
    pub height: f32,
    /// Maximum vertical excursion from the resting height
    pub amplitude: f32,
    /// Oscillations per second
    pub speed: f32,
    /// Number of segments across the width
    pub points: u32,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            height: 50.0,
            amplitude: 20.0,
            speed: 0.3,
            points: 2,
        }
    }
}

/// One frame of the wave
#[derive(Clone, Debug, PartialEq)]
pub struct WavePath {
    /// Control points left to right
    pub points: Vec<Vec2>,
    /// SVG path data for the filled band
    pub d: String,
}

impl WaveOptions {
    /// Control points for a box `width` wide, `elapsed_secs` into the animation
    pub fn points(&self, width: f32, elapsed_secs: f32) -> Vec<Vec2> {
        let segments = self.points.max(1);
        let base_phase = elapsed_secs * self.speed * TAU;
        (0..=segments)
            .map(|i| {
                let x = i as f32 / segments as f32 * width;
                let stagger = i as f32 * FRAC_PI_2 * ((i % segments) + 1) as f32;
                let y = self.height + self.amplitude * (base_phase + stagger).sin();
                Vec2::new(x, y)
            })
            .collect()
    }

    /// Filled wave path for a box of `width` x `box_height`
    pub fn path(&self, width: f32, box_height: f32, elapsed_secs: f32) -> WavePath {
        let points = self.points(width, elapsed_secs);
        let mut d = String::with_capacity(32 * points.len() + 48);

        if let Some(first) = points.first() {
            let _ = write!(d, "M {:.2} {:.2}", first.x, first.y);
        }
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let mid_x = (from.x + to.x) * 0.5;
            let _ = write!(
                d,
                " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                mid_x, from.y, mid_x, to.y, to.x, to.y
            );
        }
        let _ = write!(d, " L {:.2} {:.2} L 0 {:.2} Z", width, box_height, box_height);

        WavePath { points, d }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Crest points never leave the amplitude band
        #[test]
        fn points_within_amplitude(
            t in 0.0f32..10_000.0,
            width in 1.0f32..4000.0,
            points in 1u32..12,
        ) {
            let wave = WaveOptions { points, ..WaveOptions::default() };
            for p in wave.points(width, t) {
                prop_assert!(p.y >= wave.height - wave.amplitude - 0.001);
                prop_assert!(p.y <= wave.height + wave.amplitude + 0.001);
                prop_assert!(p.x >= 0.0 && p.x <= width + 0.001);
            }
        }
    }
}
