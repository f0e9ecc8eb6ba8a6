//! Desktop shell for the Folio portfolio site
//!
//! This crate holds every piece of UI state the site has:
//! - Floating windows (open, drag, close, z-order)
//! - The root shell (open flags, shared z-order counter, mute flag)
//! - The analog clock hands
//! - The navbar menu and the wave decoration
//! - The static content shown on the page
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and viewport clamping
//! - [`window`]: Floating window lifecycle and per-kind configuration
//! - [`input`]: Drag state machine
//! - [`transition`]: Enter/exit animations and easing
//! - [`shell`]: The root shell coordinating windows, z-order and sound
//! - [`clock`]: Clock hand angles
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{FolioConfig, NullAudio, Shell, Size, Vec2, WindowKind};
//!
//! let mut shell = Shell::new(FolioConfig::default(), Size::new(1280.0, 800.0), NullAudio);
//! shell.open_section(WindowKind::Work, 0.0);
//!
//! shell.begin_drag(WindowKind::Work, Vec2::new(600.0, 100.0));
//! shell.drag_move(WindowKind::Work, Vec2::new(700.0, 200.0), Size::new(400.0, 300.0));
//! shell.end_drag(WindowKind::Work);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No browser dependencies, testable natively
//! 2. **Time Abstraction**: Callers pass `now` in milliseconds
//! 3. **Seams as traits**: Audio output and the wall clock are traits

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod layout;
pub mod math;
pub mod navbar;
pub mod shell;
pub mod sound;
pub mod transition;
pub mod wave;
pub mod window;

mod types;
mod zorder;

pub use clock::{ClockHands, ClockTime, Hand, TimeSource};
pub use config::FolioConfig;
pub use error::{FolioError, FolioResult};
pub use input::DragState;
pub use layout::{LayoutMode, Viewport, MOBILE_BREAKPOINT};
pub use math::{clamp_to_viewport, Rect, Size, Vec2, FRAME_STYLE};
pub use navbar::Navbar;
pub use shell::{Shell, ShellSnapshot, WindowSnapshot};
pub use sound::{AudioSink, NullAudio, SoundEffect};
pub use transition::{AnimationFrame, AnimationVariant, WindowAnimation};
pub use types::ZIndex;
pub use wave::{WaveOptions, WavePath};
pub use window::{FloatingWindow, WindowConfig, WindowKind, WindowPhase};
pub use zorder::{ZIndexSource, ZOrderCounter};
