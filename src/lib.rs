//! # swatch — an embeddable color-picker core
//!
//! The engine behind a three-surface color picker: a 2-D
//! saturation/value plane, a 1-D hue strip, and a 1-D alpha strip.
//! This crate wires the member crates together:
//!
//! ```text
//!   pointer-down / move / up             (host event loop)
//!       │
//!       ▼
//!   swatch-input:  DragState — active surface + origin,
//!                  translate-and-clamp to local coordinates
//!       │
//!       ▼
//!   swatch-color:  ColorState — hue ramp, plane blend, alpha,
//!                  derived display color
//!       │
//!       ▼
//!   current_color() / handle_position()  (host redraws)
//! ```
//!
//! The host owns rendering and event delivery; [`ColorPicker`] owns the
//! state. Every call is a synchronous, non-blocking pure computation —
//! no timers, no I/O, no background work. Events are consumed in the
//! order the host delivers them, and each pointer-move recomputes the
//! color from scratch, so replaying identical coordinates is always
//! idempotent.
//!
//! # Example
//!
//! ```
//! use swatch::{ColorPicker, PointerPoint, Surface};
//!
//! let mut picker = ColorPicker::new();
//! let origin = PointerPoint::new(40, 40); // plane's rect, from the host
//!
//! // Drag the plane handle to its top-right corner: pure hue.
//! picker.begin_drag(Surface::Plane, PointerPoint::new(40 + 255, 40), origin);
//! picker.end_drag();
//!
//! let color = picker.current_color();
//! assert_eq!((color.r, color.g, color.b, color.a), (255, 0, 0, 255));
//! ```

pub use swatch_color::rgb::{Rgb, Rgba};
pub use swatch_color::state::ColorState;
pub use swatch_input::drag::DragState;
pub use swatch_input::surface::{InvalidSurface, LocalPosition, PointerPoint, Surface};

// ─── ColorPicker ─────────────────────────────────────────────────────────────

/// A color-picker session: the drag state machine plus the owned color
/// selection, with the per-surface routing between them.
///
/// One instance per widget. Construct with [`ColorPicker::new`], feed it
/// pointer events, read back [`current_color`](Self::current_color) and
/// [`handle_position`](Self::handle_position) after each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPicker {
    drag: DragState,
    state: ColorState,
}

impl ColorPicker {
    /// Create a fresh session: red hue, plane handle at the top-left,
    /// fully opaque.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down on a surface.
    ///
    /// Records the active surface and the surface's origin (supplied by
    /// the presentation layer from its current layout), computes the
    /// clamped local position, applies it to the color state, and
    /// returns it so the host can place the picker handle.
    pub fn begin_drag(
        &mut self,
        surface: Surface,
        pointer: PointerPoint,
        origin: PointerPoint,
    ) -> LocalPosition {
        let local = self.drag.begin(surface, pointer, origin);
        self.apply(surface, local);
        local
    }

    /// Pointer-move. No-op (`None`) unless a drag is in flight;
    /// otherwise recomputes against the active surface and its stored
    /// origin and returns the new handle position.
    pub fn continue_drag(&mut self, pointer: PointerPoint) -> Option<LocalPosition> {
        let (surface, local) = self.drag.motion(pointer)?;
        self.apply(surface, local);
        Some(local)
    }

    /// Pointer-up. Idempotent; calling with no drag in flight is a no-op.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Route one drag sample to the color state. The single dispatch
    /// point between surfaces and color math.
    fn apply(&mut self, surface: Surface, local: LocalPosition) {
        match surface {
            Surface::Plane => self.state.set_plane(local.x, local.y),
            Surface::HueRamp => self.state.set_hue_y(local.y),
            Surface::AlphaRamp => self.state.set_alpha_x(local.x),
        }
    }

    // ── Host queries ─────────────────────────────────────────────────────

    /// The picked color, ready for the swatch.
    #[must_use]
    pub const fn current_color(&self) -> Rgba {
        self.state.rgba()
    }

    /// Where to draw a surface's picker handle, in that surface's local
    /// space. A ramp's unused axis is always 0.
    #[must_use]
    pub fn handle_position(&self, surface: Surface) -> LocalPosition {
        match surface {
            Surface::Plane => {
                let (x, y) = self.state.plane();
                LocalPosition::new(x, y)
            }
            Surface::HueRamp => LocalPosition::new(0, self.state.hue_y()),
            Surface::AlphaRamp => LocalPosition::new(self.state.alpha(), 0),
        }
    }

    /// The surface currently being dragged, if any.
    #[must_use]
    pub const fn active_surface(&self) -> Option<Surface> {
        self.drag.active_surface()
    }

    /// Whether a drag is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Read access to the full selection state (hue, plane coords, alpha).
    #[must_use]
    pub const fn state(&self) -> &ColorState {
        &self.state
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
//
// Interaction tests spanning both member crates; the per-function math
// is pinned down in swatch-color's and swatch-input's own test modules.
