use serde::{Deserialize, Serialize};

use super::easing::{ease_in_cubic, ease_in_out, ease_out_cubic};
use crate::layout::LayoutMode;

/// Scale a desktop window starts from (and shrinks to) while animating
const POP_SCALE: f32 = 0.9;

/// Vertical slide distance for the mobile variants, in pixels
const MOBILE_SLIDE_PX: f32 = 40.0;

/// Which animation a window is running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationVariant {
    /// Desktop enter: fade in while growing to full size
    PopIn,
    /// Desktop exit: fade out while shrinking
    PopOut,
    /// Mobile enter: fade in while sliding up
    PopInMobile,
    /// Mobile exit: fade out while sliding down
    PopOutMobile,
}

impl AnimationVariant {
    /// Enter variant for a layout
    pub fn enter(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Desktop => AnimationVariant::PopIn,
            LayoutMode::Mobile => AnimationVariant::PopInMobile,
        }
    }

    /// Exit variant for a layout
    pub fn exit(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Desktop => AnimationVariant::PopOut,
            LayoutMode::Mobile => AnimationVariant::PopOutMobile,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, AnimationVariant::PopOut | AnimationVariant::PopOutMobile)
    }

    pub fn is_mobile(&self) -> bool {
        matches!(
            self,
            AnimationVariant::PopInMobile | AnimationVariant::PopOutMobile
        )
    }

    /// Stylesheet class for this variant
    pub fn class_name(&self) -> &'static str {
        match self {
            AnimationVariant::PopIn => "animate-popup",
            AnimationVariant::PopOut => "animate-popup-out",
            AnimationVariant::PopInMobile => "animate-popup-mobile",
            AnimationVariant::PopOutMobile => "animate-popup-out-mobile",
        }
    }
}

/// Visual state of a window at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
}

impl AnimationFrame {
    /// Fully shown, at rest
    pub const REST: AnimationFrame = AnimationFrame {
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
    };
}

/// A running enter or exit animation
#[derive(Clone, Debug, PartialEq)]
pub struct WindowAnimation {
    /// Variant being played
    pub variant: AnimationVariant,
    /// Start time (ms)
    pub start_time: f64,
    /// Duration (ms)
    pub duration_ms: f32,
}

impl WindowAnimation {
    pub fn new(variant: AnimationVariant, now: f64, duration_ms: f32) -> Self {
        Self {
            variant,
            start_time: now,
            duration_ms,
        }
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the animation has finished
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Sample the animation
    pub fn frame(&self, now: f64) -> AnimationFrame {
        let p = self.progress(now);
        match self.variant {
            AnimationVariant::PopIn => {
                let t = ease_out_cubic(p);
                AnimationFrame {
                    opacity: t,
                    scale: POP_SCALE + (1.0 - POP_SCALE) * t,
                    offset_y: 0.0,
                }
            }
            AnimationVariant::PopOut => {
                let t = ease_in_cubic(p);
                AnimationFrame {
                    opacity: 1.0 - t,
                    scale: 1.0 - (1.0 - POP_SCALE) * t,
                    offset_y: 0.0,
                }
            }
            AnimationVariant::PopInMobile => {
                let t = ease_in_out(p);
                AnimationFrame {
                    opacity: t,
                    scale: 1.0,
                    offset_y: (1.0 - t) * MOBILE_SLIDE_PX,
                }
            }
            AnimationVariant::PopOutMobile => {
                let t = ease_in_out(p);
                AnimationFrame {
                    opacity: 1.0 - t,
                    scale: 1.0,
                    offset_y: t * MOBILE_SLIDE_PX,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_follow_layout() {
        assert_eq!(AnimationVariant::enter(LayoutMode::Desktop), AnimationVariant::PopIn);
        assert_eq!(AnimationVariant::exit(LayoutMode::Desktop), AnimationVariant::PopOut);
        assert_eq!(AnimationVariant::enter(LayoutMode::Mobile), AnimationVariant::PopInMobile);
        assert_eq!(AnimationVariant::exit(LayoutMode::Mobile), AnimationVariant::PopOutMobile);
        assert!(AnimationVariant::PopOutMobile.is_exit());
        assert!(AnimationVariant::PopOutMobile.is_mobile());
        assert!(!AnimationVariant::PopIn.is_exit());
    }

    #[test]
    fn test_enter_ends_at_rest() {
        let anim = WindowAnimation::new(AnimationVariant::PopIn, 100.0, 300.0);
        let start = anim.frame(100.0);
        assert!(start.opacity < 0.01);
        assert!((start.scale - POP_SCALE).abs() < 0.001);
        let end = anim.frame(400.0);
        assert!((end.opacity - AnimationFrame::REST.opacity).abs() < 0.001);
        assert!((end.scale - AnimationFrame::REST.scale).abs() < 0.001);
        assert!(end.offset_y.abs() < 0.001);
    }

    #[test]
    fn test_exit_fades_out() {
        let anim = WindowAnimation::new(AnimationVariant::PopOutMobile, 0.0, 250.0);
        assert!((anim.frame(0.0).opacity - 1.0).abs() < 0.001);
        let end = anim.frame(250.0);
        assert!(end.opacity < 0.001);
        assert!((end.offset_y - MOBILE_SLIDE_PX).abs() < 0.001);
    }

    #[test]
    fn test_completion() {
        let anim = WindowAnimation::new(AnimationVariant::PopOut, 1000.0, 250.0);
        assert!(!anim.is_complete(1000.0));
        assert!(!anim.is_complete(1249.0));
        assert!(anim.is_complete(1250.0));
        assert!(anim.is_complete(5000.0));
    }
}
