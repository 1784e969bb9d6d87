// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Overlap predicate and per-axis penetration depth.
//!
//! Both functions take boxes as `(position, hitbox)` where `position` is the
//! minimum corner. They are kept as free functions over raw parts so the
//! solver can test hypothetical placements without building objects.

use crate::types::axis::Axis;
use crate::types::hitbox::Hitbox;
use crate::types::vec2::Vec2;

/// Constant added to both components of every [`overlap_rect`] result.
///
/// Pushing a body back by the exact penetration depth can leave it touching
/// or still inside by a rounding error; the extra distance clears it.
pub const OVERLAP_EPSILON: f32 = 0.01;

/// Per-axis penetration depth between two boxes, epsilon included.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap {
    /// Depth along X.
    pub x: f32,
    /// Depth along Y.
    pub y: f32,
}

impl Overlap {
    /// Creates an overlap from raw depths.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Depth along `axis`.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// The axis with the smaller depth, i.e. the cheaper way out.
    ///
    /// Ties go to [`Axis::Y`].
    #[must_use]
    pub fn smaller_axis(&self) -> Axis {
        if self.x < self.y {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

/// Returns `true` if the two boxes intersect with positive area.
///
/// Strict on faces: boxes that share an edge do not overlap, so a body resting
/// exactly on a surface is not considered inside it.
#[must_use]
pub fn overlaps(pos1: Vec2, box1: Hitbox, pos2: Vec2, box2: Hitbox) -> bool {
    pos1.x < pos2.x + box2.width()
        && pos1.x + box1.width() > pos2.x
        && pos1.y < pos2.y + box2.height()
        && pos1.y + box1.height() > pos2.y
}

/// Penetration depth of two boxes on each axis, plus [`OVERLAP_EPSILON`].
///
/// Per axis this is half the combined extent minus the distance between the
/// box centers. Only meaningful when [`overlaps`] holds for the same pair;
/// otherwise components can be zero or negative.
#[must_use]
pub fn overlap_rect(pos1: Vec2, box1: Hitbox, pos2: Vec2, box2: Hitbox) -> Overlap {
    Overlap {
        x: depth(pos1.x, box1.width(), pos2.x, box2.width()),
        y: depth(pos1.y, box1.height(), pos2.y, box2.height()),
    }
}

fn depth(p1: f32, e1: f32, p2: f32, e2: f32) -> f32 {
    let minimum = e1 + e2;
    let actual = (e1 + e2) / 2.0 + ((0.5 * e1 + p1) - (0.5 * e2 + p2)).abs();
    minimum - actual + OVERLAP_EPSILON
}
