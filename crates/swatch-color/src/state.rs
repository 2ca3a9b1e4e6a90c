//! Owned color selection state.
//!
//! `ColorState` is the single place the live selection lives: the hue
//! picked on the strip, the plane coordinates that shaped it, the alpha
//! scalar, and the displayed color derived from the first three. No
//! globals — the widget session owns one of these and hands it to the
//! drag dispatch.
//!
//! The plane coordinates are retained deliberately: picking a new hue
//! re-derives the displayed color from the *stored* plane position, so
//! the user can walk the rainbow without re-dragging the plane. Alpha is
//! orthogonal and never touches the color channels.

use crate::plane::plane_color;
use crate::ramp::{alpha_from_x, hue_from_y};
use crate::rgb::{Rgb, Rgba};

/// The picker's owned selection: hue, plane position, alpha, and the
/// derived display color. Mutators recompute the display color from
/// scratch on every write — no incremental accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    hue: Rgb,
    hue_y: u8,
    plane_x: u8,
    plane_y: u8,
    alpha: u8,
    color: Rgb,
}

impl Default for ColorState {
    /// A fresh session: pure red hue at the top of the strip, plane
    /// handle at the top-left, displayed color red, fully opaque.
    fn default() -> Self {
        Self {
            hue: Rgb::RED,
            hue_y: 0,
            plane_x: 0,
            plane_y: 0,
            alpha: 255,
            color: Rgb::RED,
        }
    }
}

impl ColorState {
    /// Create the initial session state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutators (one per surface) ------------------------------------------

    /// Select a hue from the strip. Recomputes the displayed color using
    /// the stored plane coordinates — a hue change must not require a
    /// fresh plane drag.
    pub fn set_hue_y(&mut self, y: u8) {
        self.hue_y = y;
        self.hue = hue_from_y(y);
        self.color = plane_color(self.hue, self.plane_x, self.plane_y);
    }

    /// Move the plane handle. Recomputes the displayed color against the
    /// stored hue.
    pub fn set_plane(&mut self, x: u8, y: u8) {
        self.plane_x = x;
        self.plane_y = y;
        self.color = plane_color(self.hue, x, y);
    }

    /// Move the alpha handle. Touches alpha only.
    pub fn set_alpha_x(&mut self, x: u8) {
        self.alpha = alpha_from_x(x);
    }

    // -- Accessors ------------------------------------------------------------

    /// The fully saturated base hue.
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> Rgb {
        self.hue
    }

    /// The hue strip y position that produced [`hue`](Self::hue).
    #[inline]
    #[must_use]
    pub const fn hue_y(&self) -> u8 {
        self.hue_y
    }

    /// The stored plane coordinates (x, y).
    #[inline]
    #[must_use]
    pub const fn plane(&self) -> (u8, u8) {
        (self.plane_x, self.plane_y)
    }

    /// The alpha scalar (0 transparent, 255 opaque).
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The displayed color without alpha.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The displayed color with alpha — what the host paints the swatch with.
    #[inline]
    #[must_use]
    pub const fn rgba(&self) -> Rgba {
        self.color.with_alpha(self.alpha)
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
