// SPDX-License-Identifier: MIT
//
// The saturation/value plane.
//
// A 256×256 blend anchored at three corners: white at the top-left,
// the selected hue at the top-right, black along the entire bottom
// edge. Moving right trades whiteness for hue; moving down scales
// everything toward black. Each channel is independent:
//
//   channel = round( (1 − y/255) · ((255 − C)·(1 − x/255) + C) )
//
// where C is the hue's value for that channel. The inner term walks
// from 255 (x = 0) to C (x = 255); the outer factor darkens it to 0
// at y = 255.

use crate::rgb::Rgb;

/// Blend the selected hue across the plane at local position (x, y).
///
/// Exact corners: `(0, 0)` is white, `(255, 0)` is `hue` itself, and
/// any position with `y = 255` is black regardless of x or hue.
#[must_use]
pub fn plane_color(hue: Rgb, x: u8, y: u8) -> Rgb {
    Rgb::new(
        channel(hue.r, x, y),
        channel(hue.g, x, y),
        channel(hue.b, x, y),
    )
}

/// One channel of the bilinear blend.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(c: u8, x: u8, y: u8) -> u8 {
    let fx = f64::from(x) / 255.0;
    let fy = f64::from(y) / 255.0;
    let toward_hue = f64::from(255 - c).mul_add(1.0 - fx, f64::from(c));
    ((1.0 - fy) * toward_hue).round() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
