//! The drag gesture state machine.
//!
//! A picker session is either idle or dragging exactly one surface:
//!
//! ```text
//!          begin(surface, raw, origin)
//!   Idle ────────────────────────────▶ Dragging { surface, origin }
//!     ◀──────────────────────────────┘
//!               end()
//! ```
//!
//! The surface origin captured at pointer-down is retained for the whole
//! gesture, so every pointer-move repeats the identical translate-and-
//! clamp computation — including while the pointer is outside the widget.
//! Motion while idle returns `None` (a no-op, not an error), and `end`
//! is idempotent: pointer-up with no gesture in flight does nothing.

use crate::surface::{LocalPosition, PointerPoint, Surface};

/// Tracks which surface (if any) owns the current pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A gesture is in flight on `surface`, whose logical origin in host
    /// coordinates was `origin` at pointer-down.
    Dragging {
        surface: Surface,
        origin: PointerPoint,
    },
}

impl DragState {
    /// Create an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Start a gesture: record the active surface and its origin, and
    /// return the clamped local position of the initial pointer-down.
    ///
    /// Beginning while already dragging simply re-targets the gesture —
    /// the host's event ordering (down before moves before up) makes
    /// this unreachable in practice, but it is not an error.
    pub fn begin(
        &mut self,
        surface: Surface,
        raw: PointerPoint,
        origin: PointerPoint,
    ) -> LocalPosition {
        *self = Self::Dragging { surface, origin };
        surface.local_position(raw, origin)
    }

    /// Process a pointer-move. Returns the active surface and the
    /// re-clamped local position, or `None` when idle.
    #[must_use]
    pub fn motion(&self, raw: PointerPoint) -> Option<(Surface, LocalPosition)> {
        match *self {
            Self::Idle => None,
            Self::Dragging { surface, origin } => {
                Some((surface, surface.local_position(raw, origin)))
            }
        }
    }

    /// Finish the gesture. Idempotent.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// The surface owning the gesture, if one is in flight.
    #[must_use]
    pub const fn active_surface(&self) -> Option<Surface> {
        match self {
            Self::Idle => None,
            Self::Dragging { surface, .. } => Some(*surface),
        }
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
