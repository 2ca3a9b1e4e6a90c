// SPDX-License-Identifier: MIT
//
// The 1-D ramps: hue strip and alpha strip.
//
// The hue ramp partitions the strip's 0–255 extent into six contiguous
// bands. Within a band exactly one channel ramps linearly while the
// other two sit pinned at 0 or 255, so every output is fully saturated:
//
//   y:    0 ──── 43 ──── 84 ──── 127 ──── 168 ──── 211 ──── 255
//         red   magenta  blue    cyan │   green    yellow   red
//          └ b ↑ ─┴─ r ↓ ─┴─ g ↑ ─┘   └ constant ┴── r ↑ ─┴─ g ↓
//
// Band thresholds are ⌊p · 255⌋ for p = 17%, 33%, 50%, 66%, 83%.
// Each interior threshold belongs to the band *below* it (membership
// is `lo..=threshold`), and adjacent band formulas agree at the shared
// thresholds — except 127→128, where the constant green band makes the
// ramp deliberately discontinuous (cyan at 127, green at 128). The
// cycle closes: y = 0 and y = 255 are both pure red.
//
// The alpha ramp is the identity: local x *is* the alpha byte.

use crate::rgb::Rgb;

/// ⌊0.17 · 255⌋ — end of the red→magenta band.
const T17: u8 = 43;
/// ⌊0.33 · 255⌋ — end of the magenta→blue band.
const T33: u8 = 84;
/// ⌊0.50 · 255⌋ — end of the blue→cyan band.
const T50: u8 = 127;
/// ⌊0.66 · 255⌋ — end of the constant green band.
const T66: u8 = 168;
/// ⌊0.83 · 255⌋ — end of the green→yellow band.
const T83: u8 = 211;

/// Map a hue-ramp y position to its fully saturated hue.
///
/// Each interior threshold belongs to the lower band. The result always
/// has at least one channel at 0 and one at 255.
#[must_use]
pub fn hue_from_y(y: u8) -> Rgb {
    if y <= T17 {
        Rgb::new(255, 0, rising(y, 0, T17))
    } else if y <= T33 {
        Rgb::new(falling(y, T17, T33), 0, 255)
    } else if y <= T50 {
        Rgb::new(0, rising(y, T33, T50), 255)
    } else if y <= T66 {
        Rgb::new(0, 255, 0)
    } else if y <= T83 {
        Rgb::new(rising(y, T66, T83), 255, 0)
    } else {
        Rgb::new(255, falling(y, T83, 255), 0)
    }
}

/// Map an alpha-ramp x position to an alpha byte. The ramp is linear
/// across the full extent, so this is the identity — kept as a named
/// mapping so all three surface→value functions live here.
#[inline]
#[must_use]
pub const fn alpha_from_x(x: u8) -> u8 {
    x
}

/// round(255 · (y − lo) / (hi − lo)) — channel ramping 0 → 255 across
/// the band ending at `hi`. `lo` is the boundary owned by the band
/// below (or 0 for the first band).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rising(y: u8, lo: u8, hi: u8) -> u8 {
    let t = f64::from(y - lo) / f64::from(hi - lo);
    (255.0 * t).round() as u8
}

/// round(255 · (1 − (y − lo) / (hi − lo))) — channel ramping 255 → 0.
///
/// Not the same as `255 - rising(..)`: the round of the complement can
/// differ by one at midpoints, and the band formulas are normative.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn falling(y: u8, lo: u8, hi: u8) -> u8 {
    let t = f64::from(y - lo) / f64::from(hi - lo);
    (255.0 * (1.0 - t)).round() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Cycle endpoints ──────────────────────────────────────────────────

    #[test]
    fn starts_at_red() {
        assert_eq!(hue_from_y(0), Rgb::RED);
    }

    #[test]
    fn ends_at_red() {
        // The rainbow cycle closes: both extremes are pure red.
        assert_eq!(hue_from_y(255), Rgb::RED);
    }

    // ── Band vertices ────────────────────────────────────────────────────

    #[test]
    fn rainbow_vertices() {
        assert_eq!(hue_from_y(T17), Rgb::new(255, 0, 255)); // magenta
        assert_eq!(hue_from_y(T33), Rgb::new(0, 0, 255)); // blue
        assert_eq!(hue_from_y(T50), Rgb::new(0, 255, 255)); // cyan
        assert_eq!(hue_from_y(T66), Rgb::new(0, 255, 0)); // green
        assert_eq!(hue_from_y(T83), Rgb::new(255, 255, 0)); // yellow
    }

    // ── Boundary agreement ───────────────────────────────────────────────
    //
    // Each interior threshold is covered by the lower band, but the two
    // neighboring formulas should produce the same color there (so the
    // membership convention is invisible in the output).

    #[test]
    fn formulas_agree_at_t17() {
        assert_eq!(rising(T17, 0, T17), 255); // band 1: b fully up
        assert_eq!(falling(T17, T17, T33), 255); // band 2: r not yet down
    }

    #[test]
    fn formulas_agree_at_t33() {
        assert_eq!(falling(T33, T17, T33), 0); // band 2: r fully down
        assert_eq!(rising(T33, T33, T50), 0); // band 3: g not yet up
    }

    #[test]
    fn formulas_agree_at_t66() {
        // band 4 is constant (0, 255, 0); band 5's r has not risen yet.
        assert_eq!(rising(T66, T66, T83), 0);
    }

    #[test]
    fn formulas_agree_at_t83() {
        assert_eq!(rising(T83, T66, T83), 255); // band 5: r fully up
        assert_eq!(falling(T83, T83, 255), 255); // band 6: g not yet down
    }

    #[test]
    fn cyan_green_seam_is_discontinuous() {
        // The constant green band starts right after cyan; the blue
        // channel drops 255 → 0 between 127 and 128.
        assert_eq!(hue_from_y(127), Rgb::new(0, 255, 255));
        assert_eq!(hue_from_y(128), Rgb::new(0, 255, 0));
    }

    // ── Saturation invariant ─────────────────────────────────────────────

    #[test]
    fn every_hue_is_fully_saturated() {
        for y in 0..=255u8 {
            let Rgb { r, g, b } = hue_from_y(y);
            let lo = r.min(g).min(b);
            let hi = r.max(g).max(b);
            assert_eq!(lo, 0, "no zero channel at y={y}");
            assert_eq!(hi, 255, "no full channel at y={y}");
        }
    }

    // ── Ramp direction within bands ──────────────────────────────────────

    #[test]
    fn band_one_blue_rises() {
        let mut prev = hue_from_y(0).b;
        for y in 1..=T17 {
            let b = hue_from_y(y).b;
            assert!(b >= prev, "blue went down inside band 1 at y={y}");
            prev = b;
        }
    }

    #[test]
    fn band_six_green_falls() {
        let mut prev = hue_from_y(212).g;
        for y in 213..=255u8 {
            let g = hue_from_y(y).g;
            assert!(g <= prev, "green went up inside band 6 at y={y}");
            prev = g;
        }
    }

    #[test]
    fn mid_band_sample_values() {
        // y = 21 in band 1: b = round(255 · 21/43) = round(124.53) = 125.
        assert_eq!(hue_from_y(21), Rgb::new(255, 0, 125));
        // y = 63 in band 2: r = round(255 · (1 − 20/41)) = round(130.6) = 131.
        assert_eq!(hue_from_y(63), Rgb::new(131, 0, 255));
        // y = 150 sits in the constant green band.
        assert_eq!(hue_from_y(150), Rgb::new(0, 255, 0));
    }

    // ── Alpha ramp ───────────────────────────────────────────────────────

    #[test]
    fn alpha_is_identity() {
        assert_eq!(alpha_from_x(0), 0);
        assert_eq!(alpha_from_x(128), 128);
        assert_eq!(alpha_from_x(255), 255);
    }
}
