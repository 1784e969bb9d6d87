// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::axis::Axis;
use thiserror::Error;

/// Errors raised when building geometry from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A hitbox dimension was zero, negative, or not finite.
    #[error("hitbox extents must be finite and positive, got {width}x{height}")]
    NonPositiveExtent {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
}

/// Width and height of an axis-aligned box.
///
/// Invariants:
/// - Both extents are finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f32; 2]", into = "[f32; 2]"))]
pub struct Hitbox {
    width: f32,
    height: f32,
}

impl Hitbox {
    /// Creates a hitbox from its extents.
    ///
    /// # Panics
    /// Panics if either extent is not finite and strictly positive.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            Self::valid_extent(width) && Self::valid_extent(height),
            "invalid hitbox: extents must be finite and positive"
        );
        Self { width, height }
    }

    /// Fallible constructor for extents that come from outside the program.
    pub fn try_new(width: f32, height: f32) -> Result<Self, GeomError> {
        if Self::valid_extent(width) && Self::valid_extent(height) {
            Ok(Self { width, height })
        } else {
            Err(GeomError::NonPositiveExtent { width, height })
        }
    }

    fn valid_extent(v: f32) -> bool {
        v.is_finite() && v > 0.0
    }

    /// Extent along X.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Extent along Y.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl TryFrom<[f32; 2]> for Hitbox {
    type Error = GeomError;

    fn try_from([width, height]: [f32; 2]) -> Result<Self, Self::Error> {
        Self::try_new(width, height)
    }
}

impl From<Hitbox> for [f32; 2] {
    fn from(h: Hitbox) -> Self {
        [h.width, h.height]
    }
}
