// SPDX-License-Identifier: MIT
//
// Picker surfaces and coordinate spaces.
//
// Three gradient rectangles, each with a fixed logical extent:
//
//   Plane      256 × 256   saturation/value square
//   HueRamp      1 × 256   vertical rainbow strip (only y selects)
//   AlphaRamp  256 × 1     horizontal opacity strip (only x selects)
//
// A ramp's unused axis is modeled as extent 1, so the shared clamp
// (`0 ..= extent − 1`) pins it to 0 and the handle can never wander
// along it. Actual pixel rectangles belong to the presentation layer;
// it supplies the rectangle's origin with each pointer-down and the
// core works in logical units from there.
//
// Coordinate derivation, identical for every surface:
//
//   local = clamp(raw − origin, 0, extent − 1)   per axis

use std::fmt;
use std::str::FromStr;

// ─── Surface ─────────────────────────────────────────────────────────────────

/// One of the three drag surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The 2-D saturation/value square.
    Plane,
    /// The 1-D vertical hue strip.
    HueRamp,
    /// The 1-D horizontal alpha strip.
    AlphaRamp,
}

impl Surface {
    /// Logical width in units. Ramps report 1 along their unused axis.
    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            Self::Plane | Self::AlphaRamp => 256,
            Self::HueRamp => 1,
        }
    }

    /// Logical height in units.
    #[must_use]
    pub const fn height(self) -> u16 {
        match self {
            Self::Plane | Self::HueRamp => 256,
            Self::AlphaRamp => 1,
        }
    }

    /// The crate's canonical name for this surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::HueRamp => "hue",
            Self::AlphaRamp => "alpha",
        }
    }

    /// Resolve a host-supplied surface tag.
    ///
    /// Accepts the canonical names (`"plane"`, `"hue"`, `"alpha"`) and
    /// the legacy host tags (`"colors"`, `"colorGroup"`,
    /// `"alphaChannel"`) so existing presentation layers keep working.
    ///
    /// # Errors
    ///
    /// [`InvalidSurface`] for any other tag. Fatal to that call only —
    /// nothing is mutated.
    pub fn from_tag(tag: &str) -> Result<Self, InvalidSurface> {
        match tag {
            "plane" | "colors" => Ok(Self::Plane),
            "hue" | "colorGroup" => Ok(Self::HueRamp),
            "alpha" | "alphaChannel" => Ok(Self::AlphaRamp),
            _ => Err(InvalidSurface {
                tag: tag.to_string(),
            }),
        }
    }

    /// Translate a raw host pointer into this surface's local space and
    /// clamp it to the valid extent.
    ///
    /// The upper clamp bound is `extent − 1`, not `extent`: a 256-wide
    /// surface addresses columns 0–255.
    #[must_use]
    pub fn local_position(self, raw: PointerPoint, origin: PointerPoint) -> LocalPosition {
        LocalPosition {
            x: clamp_axis(raw.x - origin.x, self.width()),
            y: clamp_axis(raw.y - origin.y, self.height()),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = InvalidSurface;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// An unrecognized surface tag from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSurface {
    /// The tag as the host supplied it.
    pub tag: String,
}

impl fmt::Display for InvalidSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized surface tag {:?}", self.tag)
    }
}

impl std::error::Error for InvalidSurface {}

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// A raw pointer position in host coordinates. Signed: during a drag
/// the pointer routinely sits above or left of the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerPoint {
    pub x: i32,
    pub y: i32,
}

impl PointerPoint {
    /// Create a raw pointer position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A surface-local position, clamped to `[0, extent − 1]`.
///
/// `u8` by construction: every surface extent is at most 256, so a
/// clamped coordinate always fits — the type carries the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocalPosition {
    pub x: u8,
    pub y: u8,
}

impl LocalPosition {
    /// Create a local position.
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for LocalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Clamp one translated axis to `[0, size − 1]`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_axis(v: i32, size: u16) -> u8 {
    // Safe: the clamp bounds the value to 0..=255 before truncation.
    v.clamp(0, i32::from(size) - 1) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
