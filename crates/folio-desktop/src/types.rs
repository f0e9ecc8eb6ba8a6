//! Core type definitions shared across the shell
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Stacking priority of a floating window
///
/// Higher values draw on top. Values come from the shell's shared
/// counter and are never reused within a page session.
pub type ZIndex = u64;
