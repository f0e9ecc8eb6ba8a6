//! Pointer input handling
//!
//! Provides the explicit drag state machine each floating window uses.

mod drag;

pub use drag::DragState;
