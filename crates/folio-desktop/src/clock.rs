//! Retro analog clock
//!
//! Hand angles are pure functions of a local time sample. A hand animates
//! between samples except when its own reading is zero, where the
//! transition is dropped so the hand jumps back to twelve instead of
//! sweeping a full circle backwards.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// A local wall-clock sample (24-hour)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> FolioResult<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(FolioError::InvalidConfig {
                field: "clock_time",
                reason: format!("{:02}:{:02}:{:02} is not a time of day", hours, minutes, seconds),
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

/// Source of the current local time
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// One hand of the clock
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Rotation clockwise from twelve
    pub degrees: f32,
    /// Whether to animate into this angle from the previous sample
    pub animate: bool,
}

impl Hand {
    /// CSS `transition` value for this hand
    pub fn transition_css(&self, transition_ms: u32) -> String {
        if self.animate {
            format!("transform {}ms linear", transition_ms)
        } else {
            "none".to_string()
        }
    }

    /// CSS `transform` value for this hand
    pub fn transform_css(&self) -> String {
        format!("rotate({}deg)", self.degrees)
    }
}

/// All three hands for one sample
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockHands {
    pub hour: Hand,
    pub minute: Hand,
    pub second: Hand,
}

impl ClockHands {
    pub fn at(time: ClockTime) -> Self {
        let ClockTime {
            hours,
            minutes,
            seconds,
        } = time;
        Self {
            hour: Hand {
                degrees: (hours % 12) as f32 * 30.0 + minutes as f32 * 0.5,
                animate: hours != 0,
            },
            minute: Hand {
                degrees: minutes as f32 * 6.0,
                animate: minutes != 0,
            },
            second: Hand {
                degrees: seconds as f32 * 6.0,
                animate: seconds != 0,
            },
        }
    }

    pub fn sample(source: &impl TimeSource) -> Self {
        Self::at(source.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(ClockTime);

    impl TimeSource for Fixed {
        fn now(&self) -> ClockTime {
            self.0
        }
    }

    #[test]
    fn test_half_past_three() {
        let hands = ClockHands::at(ClockTime::new(3, 30, 0).unwrap());
        assert!((hands.hour.degrees - 105.0).abs() < 0.001);
        assert!((hands.minute.degrees - 180.0).abs() < 0.001);
        assert!((hands.second.degrees - 0.0).abs() < 0.001);
        assert!(hands.hour.animate);
        assert!(hands.minute.animate);
        assert!(!hands.second.animate);
    }

    #[test]
    fn test_midnight_suppresses_all_transitions() {
        let hands = ClockHands::sample(&Fixed(ClockTime::new(0, 0, 0).unwrap()));
        assert!((hands.hour.degrees - 0.0).abs() < 0.001);
        assert!(!hands.hour.animate);
        assert!(!hands.minute.animate);
        assert!(!hands.second.animate);
        assert_eq!(hands.hour.transition_css(300), "none");
    }

    #[test]
    fn test_noon_hour_hand_still_animates() {
        // 12:00 wraps the dial but only hour zero (midnight) suppresses
        let hands = ClockHands::at(ClockTime::new(12, 0, 5).unwrap());
        assert!((hands.hour.degrees - 0.0).abs() < 0.001);
        assert!(hands.hour.animate);
        assert_eq!(hands.second.transition_css(300), "transform 300ms linear");
    }

    #[test]
    fn test_evening_wraps_dial() {
        let hands = ClockHands::at(ClockTime::new(21, 15, 45).unwrap());
        assert!((hands.hour.degrees - 277.5).abs() < 0.001);
        assert!((hands.minute.degrees - 90.0).abs() < 0.001);
        assert!((hands.second.degrees - 270.0).abs() < 0.001);
        assert_eq!(hands.minute.transform_css(), "rotate(90deg)");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0, 0).is_err());
        assert!(ClockTime::new(0, 60, 0).is_err());
        assert!(ClockTime::new(0, 0, 60).is_err());
    }
}
