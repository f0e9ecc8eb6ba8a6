//! Easing functions for animations

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in cubic function
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out() {
        assert!((ease_in_out(0.0) - 0.0).abs() < 0.001);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_cubic_endpoints() {
        assert!((ease_out_cubic(0.0) - 0.0).abs() < 0.001);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_cubic(0.0) - 0.0).abs() < 0.001);
        assert!((ease_in_cubic(1.0) - 1.0).abs() < 0.001);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Easing functions map [0,1] into [0,1]
        #[test]
        fn easing_bounded_output(t in 0.0f32..=1.0) {
            for (name, f) in [
                ("ease_in_out", ease_in_out as fn(f32) -> f32),
                ("ease_out_cubic", ease_out_cubic),
                ("ease_in_cubic", ease_in_cubic),
            ] {
                let result = f(t);
                prop_assert!((0.0..=1.0).contains(&result), "{}({}) = {}", name, t, result);
            }
        }

        /// Easing functions are monotonically increasing
        #[test]
        fn easing_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            prop_assert!(ease_in_out(lo) <= ease_in_out(hi) + 0.001);
            prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi) + 0.001);
            prop_assert!(ease_in_cubic(lo) <= ease_in_cubic(hi) + 0.001);
        }
    }
}
