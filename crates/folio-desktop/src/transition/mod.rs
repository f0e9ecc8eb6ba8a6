//! Window enter/exit animations
//!
//! Each floating window runs exactly one animation at a time: an enter
//! variant after opening, an exit variant after a close request. The
//! variant pair (desktop or mobile) is fixed when the animation starts,
//! so a resize mid-animation only affects the next open or close.
//!
//! Callers sample [`WindowAnimation::frame`] each frame and check
//! [`WindowAnimation::is_complete`] to learn when an exit has finished.

mod animation;
mod easing;

pub use animation::{AnimationFrame, AnimationVariant, WindowAnimation};
