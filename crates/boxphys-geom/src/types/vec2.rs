// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign};

use super::axis::Axis;

/// Two-component vector used for positions, velocities, and forces.
///
/// Components are public: the solver reads and writes them every tick and
/// there is no invariant to protect.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component (positive is up).
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the components as `[x, y]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Returns the component on `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Mutable access to the component on `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Overwrites the component on `axis`.
    pub fn set(&mut self, axis: Axis, value: f32) {
        *self.get_mut(axis) = value;
    }

    /// Returns `true` when both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors_address_the_right_component() {
        let mut v = Vec2::new(1.0, 2.0);
        assert_eq!(v.get(Axis::X), 1.0);
        assert_eq!(v.get(Axis::Y), 2.0);
        v.set(Axis::Y, -4.0);
        *v.get_mut(Axis::X) += 0.5;
        assert_eq!(v.to_array(), [1.5, -4.0]);
    }

    #[test]
    fn addition_is_component_wise() {
        let mut v = Vec2::new(1.0, -2.0) + Vec2::from([0.5, 3.0]);
        assert_eq!(v, Vec2::new(1.5, 1.0));
        v += Vec2::from((1.0, 1.0));
        assert_eq!(v, Vec2::new(2.5, 2.0));
    }
}
