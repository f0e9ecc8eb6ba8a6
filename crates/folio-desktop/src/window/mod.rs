//! Floating window module
//!
//! One parameterized window behavior shared by the About-Me, Work and
//! Tools panels. A [`WindowKind`] picks the [`WindowConfig`] (title,
//! initial spot, sounds); a [`FloatingWindow`] holds the per-instance
//! state between mount and unmount.

mod config;
mod kind;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use kind::WindowKind;
pub use window::{FloatingWindow, WindowPhase};
