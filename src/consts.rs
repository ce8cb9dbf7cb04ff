//! Fixed brush parameters.
//!
//! The widget takes no configuration; these bounds and defaults are part of
//! the design.

/// Smallest selectable brush radius in pixels.
pub const MIN_BRUSH_SIZE: u32 = 5;

/// Largest selectable brush radius in pixels.
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Amount one press of a size button changes the radius by.
pub const BRUSH_SIZE_STEP: u32 = 5;

/// Brush radius at startup.
pub const DEFAULT_BRUSH_SIZE: u32 = 30;

/// Brush color at startup.
pub const DEFAULT_BRUSH_COLOR: &str = "black";
