//! Root shell
//!
//! The shell owns everything shared between windows: which windows are
//! mounted, the z-order counter, the mute flag and the viewport. Front
//! ends forward every user interaction here and render from the result.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    Shell                     │
//! │  ┌──────────┐ ┌───────────────┐ ┌─────────┐  │
//! │  │ Viewport │ │ ZOrderCounter │ │ muted   │  │
//! │  └──────────┘ └───────────────┘ └─────────┘  │
//! │  ┌────────────────────────────────────────┐  │
//! │  │ [Option<FloatingWindow>; 3]            │  │
//! │  │  AboutMe │ Work │ Tools                │  │
//! │  └────────────────────────────────────────┘  │
//! │  AudioSink (mute-gated)                      │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::FolioConfig;
use crate::error::{FolioError, FolioResult};
use crate::layout::{LayoutMode, Viewport};
use crate::math::{Size, Vec2};
use crate::sound::{AudioSink, SoundEffect};
use crate::transition::AnimationVariant;
use crate::types::ZIndex;
use crate::window::{FloatingWindow, WindowKind};
use crate::zorder::{ZIndexSource, ZOrderCounter};

/// Root shell state for one page session
pub struct Shell<A: AudioSink> {
    config: FolioConfig,
    viewport: Viewport,
    windows: [Option<FloatingWindow>; WindowKind::COUNT],
    z_order: ZOrderCounter,
    muted: bool,
    audio: A,
}

impl<A: AudioSink> Shell<A> {
    /// Create a shell with no windows open and sound on
    pub fn new(config: FolioConfig, viewport_size: Size, audio: A) -> Self {
        let viewport = Viewport::new(viewport_size, config.mobile_breakpoint);
        let z_order = ZOrderCounter::new(config.initial_z_index);
        Self {
            config,
            viewport,
            windows: [None, None, None],
            z_order,
            muted: false,
            audio,
        }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a window of this kind is mounted (including while closing)
    pub fn is_open(&self, kind: WindowKind) -> bool {
        self.windows[kind.index()].is_some()
    }

    pub fn window(&self, kind: WindowKind) -> Option<&FloatingWindow> {
        self.windows[kind.index()].as_ref()
    }

    /// Mounted windows, in kind order
    pub fn windows(&self) -> impl Iterator<Item = &FloatingWindow> {
        self.windows.iter().flatten()
    }

    // =========================================================================
    // Z-order
    // =========================================================================

    /// Advance the shared counter and return the new top value
    pub fn next_z_index(&mut self) -> ZIndex {
        self.z_order.next_z_index()
    }

    /// Highest stacking value handed out so far
    pub fn top_z_index(&self) -> ZIndex {
        self.z_order.top()
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Open a window from the home layout
    ///
    /// Plays the open sound, then mounts the window on top. An already
    /// open window is brought to front instead; a window that is still
    /// closing is replaced by a fresh one.
    pub fn open_section(&mut self, kind: WindowKind, now: f64) -> ZIndex {
        self.play(SoundEffect::Open);

        let slot = kind.index();
        if let Some(window) = self.windows[slot].as_mut().filter(|w| !w.is_closing()) {
            let z_index = window.raise(&mut self.z_order);
            debug!(kind = kind.id(), z = z_index, "raised open window");
            return z_index;
        }

        let z_index = self.z_order.next_z_index();
        self.windows[slot] = Some(FloatingWindow::open(
            kind,
            &self.viewport,
            z_index,
            now,
            self.config.enter_duration_ms,
        ));
        debug!(kind = kind.id(), z = z_index, "opened window");
        z_index
    }

    /// Open a window by its string ID
    pub fn open_section_by_id(&mut self, id: &str, now: f64) -> FolioResult<ZIndex> {
        let kind =
            WindowKind::from_id(id).ok_or_else(|| FolioError::UnknownSection(id.to_string()))?;
        Ok(self.open_section(kind, now))
    }

    /// Close button pressed: play the close sound and start the exit animation
    pub fn request_close(&mut self, kind: WindowKind, now: f64) -> bool {
        let exit_ms = self.config.exit_duration_ms;
        let accepted = self.windows[kind.index()]
            .as_mut()
            .map(|w| w.request_close(now, exit_ms))
            .unwrap_or(false);
        if accepted {
            self.play(SoundEffect::Close);
            debug!(kind = kind.id(), "closing window");
        }
        accepted
    }

    /// Exit animation finished: unmount the window and discard its state
    ///
    /// Ignored unless the window is closing.
    pub fn finish_close(&mut self, kind: WindowKind) -> bool {
        let slot = &mut self.windows[kind.index()];
        if slot.as_ref().is_some_and(|w| w.is_closing()) {
            *slot = None;
            debug!(kind = kind.id(), "unmounted window");
            return true;
        }
        false
    }

    /// Advance time: unmount every window whose exit animation completed
    pub fn tick(&mut self, now: f64) -> Vec<WindowKind> {
        let finished: Vec<WindowKind> = self
            .windows()
            .filter(|w| w.exit_finished(now))
            .map(|w| w.kind())
            .collect();
        for kind in &finished {
            self.finish_close(*kind);
        }
        finished
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Pointer-down on a window's drag handle
    pub fn begin_drag(&mut self, kind: WindowKind, pointer: Vec2) -> bool {
        match self.windows[kind.index()].as_mut() {
            Some(window) => {
                let started = window.begin_drag(pointer, &mut self.z_order);
                if started {
                    trace!(kind = kind.id(), x = pointer.x, y = pointer.y, "drag started");
                }
                started
            }
            None => false,
        }
    }

    /// Pointer moved while a window is dragging
    ///
    /// `box_size` is the window's rendered size right now. Returns the new
    /// clamped position, or `None` if the window is not dragging.
    pub fn drag_move(&mut self, kind: WindowKind, pointer: Vec2, box_size: Size) -> Option<Vec2> {
        let viewport = self.viewport.size;
        self.windows[kind.index()]
            .as_mut()?
            .drag_move(pointer, box_size, viewport, &mut self.z_order)
    }

    /// Pointer released; returns true if this window was dragging
    pub fn end_drag(&mut self, kind: WindowKind) -> bool {
        self.windows[kind.index()]
            .as_mut()
            .map(|w| w.end_drag())
            .unwrap_or(false)
    }

    /// Pointer released somewhere on the page: end every drag
    pub fn end_all_drags(&mut self) -> bool {
        let mut ended = false;
        for window in self.windows.iter_mut().flatten() {
            ended |= window.end_drag();
        }
        ended
    }

    /// Text selection stays off while any window is being dragged
    pub fn is_selection_suppressed(&self) -> bool {
        self.windows().any(|w| w.is_dragging())
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Viewport resized: update the layout mode of every mounted window
    ///
    /// Windows are not re-clamped; they are only clamped on the next drag.
    pub fn resize(&mut self, size: Size) -> LayoutMode {
        let layout = self.viewport.resize(size);
        for window in self.windows.iter_mut().flatten() {
            if window.set_layout(layout) {
                debug!(kind = window.kind().id(), ?layout, "layout changed");
            }
        }
        layout
    }

    // =========================================================================
    // Sound
    // =========================================================================

    /// Flip the mute flag; unmuting plays the confirmation sound once
    pub fn toggle_mute(&mut self) -> bool {
        let was_muted = self.muted;
        self.muted = !self.muted;
        if was_muted {
            self.play(SoundEffect::MuteToggle);
        }
        debug!(muted = self.muted, "mute toggled");
        self.muted
    }

    /// Pointer entered a chip inside a window
    pub fn hover(&mut self, kind: WindowKind) {
        if kind.config().hover_sound && self.is_open(kind) {
            self.play(SoundEffect::Hover);
        }
    }

    /// Play a clip unless muted; playback failures are logged and dropped
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            trace!(effect = effect.id(), "muted");
            return;
        }
        if let Err(err) = self.audio.play(effect) {
            debug!(effect = effect.id(), %err, "sound effect skipped");
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Serializable view of the shell state
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            muted: self.muted,
            top_z_index: self.z_order.top(),
            viewport: self.viewport.size,
            layout: self.viewport.layout_mode(),
            windows: self
                .windows()
                .map(|w| WindowSnapshot {
                    kind: w.kind(),
                    position: w.position(),
                    z_index: w.z_index(),
                    dragging: w.is_dragging(),
                    closing: w.is_closing(),
                    animation: w.animation().variant,
                })
                .collect(),
        }
    }
}

/// Point-in-time view of the shell, for debugging from JavaScript
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub muted: bool,
    pub top_z_index: ZIndex,
    pub viewport: Size,
    pub layout: LayoutMode,
    pub windows: Vec<WindowSnapshot>,
}

/// One mounted window inside a [`ShellSnapshot`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub kind: WindowKind,
    pub position: Vec2,
    pub z_index: ZIndex,
    pub dragging: bool,
    pub closing: bool,
    pub animation: AnimationVariant,
}

impl ShellSnapshot {
    pub fn to_json(&self) -> FolioResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
