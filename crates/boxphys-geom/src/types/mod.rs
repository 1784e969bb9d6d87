// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the engine (vector, hitbox, axis, rect).
//!
//! Determinism notes:
//! - All math is plain `f32` arithmetic evaluated in a fixed order; nothing
//!   here uses fused multiply-add or platform intrinsics.
//! - Types are `Copy` values; no interior mutability.

#[doc = "Resolution axes (X then Y)."]
pub mod axis;
#[doc = "Strictly positive box extents."]
pub mod hitbox;
#[doc = "A hitbox anchored at a position."]
pub mod rect;
#[doc = "Two-component `f32` vectors."]
pub mod vec2;
