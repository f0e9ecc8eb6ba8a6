use crate::math::Vec2;

/// Pointer drag state for a single window
///
/// `Idle -> Dragging` on pointer-down over the drag handle, capturing the
/// cursor offset from the window's top-left. `Dragging -> Idle` on any
/// pointer-up, wherever the pointer is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Cursor position minus window top-left at drag start
        offset: Vec2,
    },
}

impl DragState {
    /// Enter the dragging state
    pub fn start(&mut self, pointer: Vec2, window_origin: Vec2) {
        *self = DragState::Dragging {
            offset: pointer - window_origin,
        };
    }

    /// Leave the dragging state; returns true if a drag was active
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragState::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Drag offset, only present while dragging
    pub fn offset(&self) -> Option<Vec2> {
        match self {
            DragState::Dragging { offset } => Some(*offset),
            DragState::Idle => None,
        }
    }

    /// Unclamped top-left the window would take for this pointer position
    pub fn target(&self, pointer: Vec2) -> Option<Vec2> {
        self.offset().map(|offset| pointer - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_captures_offset() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());

        drag.start(Vec2::new(130.0, 95.0), Vec2::new(100.0, 80.0));
        assert_eq!(drag.offset(), Some(Vec2::new(30.0, 15.0)));
        assert_eq!(drag.target(Vec2::new(230.0, 115.0)), Some(Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn test_release() {
        let mut drag = DragState::default();
        assert!(!drag.release());

        drag.start(Vec2::ZERO, Vec2::ZERO);
        assert!(drag.release());
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.target(Vec2::new(1.0, 1.0)), None);
    }
}
