use serde::{Deserialize, Serialize};

use super::{WindowConfig, WindowKind};
use crate::input::DragState;
use crate::layout::{LayoutMode, Viewport};
use crate::math::{clamp_to_viewport, Size, Vec2};
use crate::transition::{AnimationFrame, AnimationVariant, WindowAnimation};
use crate::types::ZIndex;
use crate::zorder::ZIndexSource;

/// Lifecycle phase of a mounted window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPhase {
    /// Shown (possibly still running its enter animation)
    #[default]
    Open,
    /// Close requested; the exit animation is running
    Closing,
}

/// State of one mounted floating window
///
/// Created when the shell opens a window and dropped when its exit
/// animation finishes, so nothing survives a close/reopen cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingWindow {
    kind: WindowKind,
    position: Vec2,
    z_index: ZIndex,
    drag: DragState,
    phase: WindowPhase,
    layout: LayoutMode,
    animation: WindowAnimation,
}

impl FloatingWindow {
    /// Mount a window at its kind's initial spot in the current viewport
    pub fn open(
        kind: WindowKind,
        viewport: &Viewport,
        z_index: ZIndex,
        now: f64,
        enter_duration_ms: f32,
    ) -> Self {
        let layout = viewport.layout_mode();
        Self {
            kind,
            position: viewport.fraction(kind.config().initial_fraction),
            z_index,
            drag: DragState::Idle,
            phase: WindowPhase::Open,
            layout,
            animation: WindowAnimation::new(
                AnimationVariant::enter(layout),
                now,
                enter_duration_ms,
            ),
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn config(&self) -> &'static WindowConfig {
        self.kind.config()
    }

    /// Top-left in viewport pixels
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn z_index(&self) -> ZIndex {
        self.z_index
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn is_closing(&self) -> bool {
        self.phase == WindowPhase::Closing
    }

    /// Layout mode as of the last resize
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Animation currently running (or last run)
    pub fn animation(&self) -> &WindowAnimation {
        &self.animation
    }

    /// Take the next stacking value unless this window already holds the top one
    ///
    /// Returns true if the z-index changed.
    pub fn bring_to_front(&mut self, z_order: &mut impl ZIndexSource) -> bool {
        if self.z_index == z_order.top() {
            return false;
        }
        self.z_index = z_order.next_z_index();
        true
    }

    /// Always take the next stacking value, even when already on top
    pub fn raise(&mut self, z_order: &mut impl ZIndexSource) -> ZIndex {
        self.z_index = z_order.next_z_index();
        self.z_index
    }

    /// Pointer went down on the drag handle
    ///
    /// Closing windows ignore new drags.
    pub fn begin_drag(&mut self, pointer: Vec2, z_order: &mut impl ZIndexSource) -> bool {
        if self.is_closing() {
            return false;
        }
        self.drag.start(pointer, self.position);
        self.bring_to_front(z_order);
        true
    }

    /// Pointer moved while dragging
    ///
    /// `box_size` is the window's current rendered size and `viewport` the
    /// current viewport size; both are read fresh by the caller on every
    /// move. Returns the new clamped position, or `None` when idle.
    pub fn drag_move(
        &mut self,
        pointer: Vec2,
        box_size: Size,
        viewport: Size,
        z_order: &mut impl ZIndexSource,
    ) -> Option<Vec2> {
        let target = self.drag.target(pointer)?;
        self.bring_to_front(z_order);
        self.position = clamp_to_viewport(target, box_size, viewport);
        Some(self.position)
    }

    /// Pointer released anywhere; returns true if a drag ended
    pub fn end_drag(&mut self) -> bool {
        self.drag.release()
    }

    /// Start the exit animation
    ///
    /// Ends any drag in progress. Returns false if already closing.
    pub fn request_close(&mut self, now: f64, exit_duration_ms: f32) -> bool {
        if self.is_closing() {
            return false;
        }
        self.drag.release();
        self.phase = WindowPhase::Closing;
        self.animation =
            WindowAnimation::new(AnimationVariant::exit(self.layout), now, exit_duration_ms);
        true
    }

    /// Record the layout after a viewport resize
    ///
    /// Only the next open/close picks up the new variant pair; the
    /// running animation and the position are left alone.
    pub fn set_layout(&mut self, layout: LayoutMode) -> bool {
        let changed = self.layout != layout;
        self.layout = layout;
        changed
    }

    /// True once the exit animation has played out
    pub fn exit_finished(&self, now: f64) -> bool {
        self.is_closing() && self.animation.is_complete(now)
    }

    /// Visual state to render at `now`
    pub fn frame(&self, now: f64) -> AnimationFrame {
        if !self.is_closing() && self.animation.is_complete(now) {
            return AnimationFrame::REST;
        }
        self.animation.frame(now)
    }
}
