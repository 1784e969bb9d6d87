// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::hitbox::Hitbox;
use super::vec2::Vec2;
use crate::overlap::{overlap_rect, overlaps, Overlap};

/// A hitbox placed in the world at its minimum corner.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Minimum corner.
    pub pos: Vec2,
    /// Extents.
    pub size: Hitbox,
}

impl Rect {
    /// Places `size` at `pos`.
    #[must_use]
    pub const fn new(pos: Vec2, size: Hitbox) -> Self {
        Self { pos, size }
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.width(), self.size.height())
    }

    /// Geometric center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            0.5 * self.size.width() + self.pos.x,
            0.5 * self.size.height() + self.pos.y,
        )
    }

    /// See [`overlaps`].
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(self.pos, self.size, other.pos, other.size)
    }

    /// See [`overlap_rect`].
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Overlap {
        overlap_rect(self.pos, self.size, other.pos, other.size)
    }
}
