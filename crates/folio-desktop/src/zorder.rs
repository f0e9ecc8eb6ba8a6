//! Shared stacking-order counter
//!
//! One counter per shell. It only ever moves up; every "bring to front"
//! takes the next value. Windows see it only through [`ZIndexSource`].

use crate::types::ZIndex;

/// Read-then-increment access to the shared stacking counter
pub trait ZIndexSource {
    /// Advance the counter and return the new top value
    fn next_z_index(&mut self) -> ZIndex;

    /// Highest value handed out so far
    fn top(&self) -> ZIndex;
}

/// Monotonic z-order counter owned by the shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZOrderCounter {
    highest: ZIndex,
}

impl ZOrderCounter {
    /// Create a counter whose first handed-out value is `base + 1`
    pub fn new(base: ZIndex) -> Self {
        Self { highest: base }
    }
}

impl ZIndexSource for ZOrderCounter {
    fn next_z_index(&mut self) -> ZIndex {
        self.highest += 1;
        self.highest
    }

    fn top(&self) -> ZIndex {
        self.highest
    }
}
