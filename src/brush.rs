//! Brush state: the size and color applied to newly drawn primitives.
//!
//! Size is a disc radius in pixels, saturated to
//! [`MIN_BRUSH_SIZE`]..=[`MAX_BRUSH_SIZE`] instead of rejecting out-of-range
//! steps. Changing size or color never touches pixels already committed to
//! the canvas; both take effect on the next drawn primitive.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use crate::consts::{
    BRUSH_SIZE_STEP, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
};

/// The current brush: disc radius in pixels and a CSS color string.
#[derive(Debug, Clone)]
pub struct Brush {
    size: u32,
    color: String,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            color: DEFAULT_BRUSH_COLOR.to_owned(),
        }
    }
}

impl Brush {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disc radius in pixels. Segments are stroked at twice this width so
    /// their thickness matches the disc diameter.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// CSS color applied to subsequent discs and segments.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Step the size up one notch, saturating at [`MAX_BRUSH_SIZE`].
    /// Returns the new size.
    pub fn grow(&mut self) -> u32 {
        self.size = (self.size + BRUSH_SIZE_STEP).min(MAX_BRUSH_SIZE);
        self.size
    }

    /// Step the size down one notch, saturating at [`MIN_BRUSH_SIZE`].
    /// Returns the new size.
    pub fn shrink(&mut self) -> u32 {
        self.size = self.size.saturating_sub(BRUSH_SIZE_STEP).max(MIN_BRUSH_SIZE);
        self.size
    }

    /// Replace the color. Already-drawn pixels keep theirs.
    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_owned();
    }
}
