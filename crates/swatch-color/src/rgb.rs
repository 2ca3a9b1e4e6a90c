// SPDX-License-Identifier: MIT
//
// 8-bit RGB value types.
//
// The picker speaks plain sRGB bytes end to end. `Rgb` is the color a
// surface computes; `Rgba` is what the host reads back for the swatch
// (color plus the alpha-ramp scalar). Alpha never participates in the
// channel math — it rides along untouched.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit RGB triple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure red — the hue the picker starts on.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Pure white (plane top-left corner).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black (plane bottom edge).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha value, producing the host-facing [`Rgba`].
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Channel values as normalized floats (0.0–1.0), for hosts that
    /// paint with a float pipeline.
    #[must_use]
    pub fn to_f32(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Create a color from normalized floats (clamped to 0.0–1.0).
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// An 8-bit RGBA value — the picked color as the host reads it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels without alpha.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Alpha as a normalized float (0.0 transparent, 1.0 opaque).
    #[must_use]
    pub fn alpha_f32(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// All four components as normalized floats (0.0–1.0).
    #[must_use]
    pub fn to_f32(self) -> (f32, f32, f32, f32) {
        let (r, g, b) = self.rgb().to_f32();
        (r, g, b, self.alpha_f32())
    }

    /// Format as `#rrggbbaa`. The alpha byte is always present —
    /// this type exists precisely because the picker carries one.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Rgb> for Rgba {
    /// An `Rgb` widens to an opaque `Rgba`.
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(255)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Rgb::RED, Rgb::new(255, 0, 0));
        assert_eq!(Rgb::WHITE, Rgb::new(255, 255, 255));
        assert_eq!(Rgb::BLACK, Rgb::new(0, 0, 0));
    }

    #[test]
    fn default_rgb_is_black() {
        assert_eq!(Rgb::default(), Rgb::BLACK);
    }

    #[test]
    fn default_rgba_is_opaque_black() {
        assert_eq!(Rgba::default(), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn with_alpha_carries_channels() {
        let c = Rgb::new(10, 20, 30).with_alpha(40);
        assert_eq!(c, Rgba::new(10, 20, 30, 40));
        assert_eq!(c.rgb(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn rgb_widens_to_opaque() {
        let c: Rgba = Rgb::new(1, 2, 3).into();
        assert_eq!(c.a, 255);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
        assert_eq!(Rgba::new(255, 128, 0, 51).to_hex(), "#ff800033");
    }

    #[test]
    fn display_matches_hex() {
        assert_eq!(format!("{}", Rgb::RED), "#ff0000");
        assert_eq!(format!("{}", Rgb::RED.with_alpha(0)), "#ff000000");
    }

    #[test]
    fn debug_is_hex_too() {
        assert_eq!(format!("{:?}", Rgb::new(0, 255, 0)), "#00ff00");
    }

    #[test]
    fn f32_roundtrip() {
        for c in [Rgb::BLACK, Rgb::WHITE, Rgb::new(12, 200, 99)] {
            let (r, g, b) = c.to_f32();
            assert_eq!(Rgb::from_f32(r, g, b), c);
        }
    }

    #[test]
    fn from_f32_clamps() {
        assert_eq!(Rgb::from_f32(-1.0, 2.0, 0.5), Rgb::new(0, 255, 128));
    }

    #[test]
    fn rgba_to_f32_components() {
        let (r, g, b, a) = Rgba::new(255, 0, 255, 0).to_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert!(a.abs() < 1e-6);
    }

    #[test]
    fn alpha_f32() {
        assert!((Rgba::new(0, 0, 0, 255).alpha_f32() - 1.0).abs() < 1e-6);
        assert!(Rgba::new(0, 0, 0, 0).alpha_f32().abs() < 1e-6);
    }
}
