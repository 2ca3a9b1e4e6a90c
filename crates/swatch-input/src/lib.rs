// SPDX-License-Identifier: MIT
//
// swatch-input — Pointer interaction for the swatch picker core.
//
// Turns raw host pointer coordinates into surface-local, clamped
// positions and tracks the drag gesture as an explicit state machine.
// No event listeners, no reactive effects: the host calls three
// functions (begin, motion, end) in the order its event loop delivers
// pointer-down / pointer-move / pointer-up, and gets clamped local
// positions back. Everything is synchronous and total — out-of-range
// coordinates are a normal condition (the pointer leaves the widget
// mid-drag) and are clamped, never rejected.

pub mod drag;
pub mod surface;
