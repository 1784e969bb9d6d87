// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for boxphys.

This crate provides:
- A plain 2D vector (`Vec2`) and a strictly positive box size (`Hitbox`).
- The two resolution axes (`Axis`) and per-axis penetration depths (`Overlap`).
- The overlap predicate and overlap-depth computation used by the solver
  (`overlaps`, `overlap_rect`), plus a positioned `Rect` wrapper.

Design notes:
- Deterministic: pure functions over `f32`, no hidden state.
- Boxes are anchored at their minimum corner; `y` grows upward.
- Overlap is strict on faces: boxes that only touch do not overlap.
"]

/// Overlap predicate and penetration depth.
pub mod overlap;
/// Foundational value types.
pub mod types;

pub use overlap::{overlap_rect, overlaps, Overlap, OVERLAP_EPSILON};
pub use types::axis::Axis;
pub use types::hitbox::{GeomError, Hitbox};
pub use types::rect::Rect;
pub use types::vec2::Vec2;
