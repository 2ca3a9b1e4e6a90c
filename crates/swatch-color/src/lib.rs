// SPDX-License-Identifier: MIT
//
// swatch-color — Color model for the swatch picker core.
//
// Pure, deterministic 8-bit color math. Three mappings cover the whole
// picker: a six-band rainbow ramp (strip y → fully saturated hue), a
// white→hue→black plane blend (plane x, y → displayed color), and a
// pass-through alpha ramp. `ColorState` owns the live selection so a
// hue change can re-derive the displayed color from the plane
// coordinates that last produced it.
//
// Everything here is integer-in, integer-out: positions are `u8`
// (surfaces are 256 logical units wide) and channels are `u8`. The
// intermediate arithmetic runs in f64 and rounds once, so the same
// input always yields the same channel value — the rendering host can
// recompute on every pointer move without drift.

// Single-character channel names (r, g, b, c) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]

pub mod plane;
pub mod ramp;
pub mod rgb;
pub mod state;
