// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// One of the two world axes.
///
/// Motion is resolved one axis at a time, always [`Axis::X`] before
/// [`Axis::Y`]; [`Axis::ALL`] lists them in that order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis (positive is up).
    Y,
}

impl Axis {
    /// Both axes in resolution order.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Returns the other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}
