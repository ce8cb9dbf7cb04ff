//! Stroke session state machine.
//!
//! One stroke is one pointer-down-to-pointer-up interaction. Between those
//! two events the session is `Active` and carries the previous sample point;
//! otherwise it is `Idle`. Folding the flag and the point into one tagged
//! union makes "a last point exists iff a stroke is active" structural
//! rather than a convention to maintain.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::geom::Point;

/// The two-state stroke machine: pointer-down enters `Active`, pointer-up
/// returns to `Idle`, and pointer-move is a drawing self-transition while
/// `Active` (a no-op while `Idle`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeSession {
    /// No stroke in progress; pointer-moves draw nothing.
    #[default]
    Idle,
    /// A stroke is in progress.
    Active {
        /// The previous pointer sample; the next segment starts here.
        last: Point,
    },
}

impl StrokeSession {
    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// The previous sample point, when a stroke is in progress.
    #[must_use]
    pub fn last_point(self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Active { last } => Some(last),
        }
    }
}
