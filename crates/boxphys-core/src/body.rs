// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Positional state shared by every physics object.

use boxphys_geom::{Axis, Hitbox, Overlap, Rect, Vec2};

use crate::space::SpaceId;

/// Position, velocity, and hitbox of anything that exists in a space.
///
/// Entities and concretes both embed a `Body`; it is also used on its own as
/// a throwaway probe for placement queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pos: Vec2,
    prev_pos: Vec2,
    vel: Vec2,
    hitbox: Hitbox,
    space: Option<SpaceId>,
}

impl Body {
    /// Creates a body at rest.
    #[must_use]
    pub fn new(pos: Vec2, hitbox: Hitbox) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            hitbox,
            space: None,
        }
    }

    /// Minimum corner.
    #[must_use]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Position recorded by the last [`Body::set_pos`] call.
    #[must_use]
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    /// Teleports the body, remembering where it was.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.prev_pos = self.pos;
        self.pos = Vec2::new(x, y);
    }

    /// Current velocity in units per tick.
    #[must_use]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Overwrites the velocity.
    pub fn set_vel(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Box extents.
    #[must_use]
    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    /// The hitbox placed at the current position.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.hitbox)
    }

    /// Space this body was added to, if any.
    #[must_use]
    pub fn space(&self) -> Option<SpaceId> {
        self.space
    }

    /// Returns `true` if this body currently intersects `other`.
    #[must_use]
    pub fn is_collided_with(&self, other: &Self) -> bool {
        boxphys_geom::overlaps(self.pos, self.hitbox, other.pos, other.hitbox)
    }

    /// Penetration depth against `other`; see [`boxphys_geom::overlap_rect`].
    #[must_use]
    pub fn collision_rect(&self, other: &Self) -> Overlap {
        boxphys_geom::overlap_rect(self.pos, self.hitbox, other.pos, other.hitbox)
    }

    pub(crate) fn attach(&mut self, space: SpaceId) {
        self.space = Some(space);
    }

    pub(crate) fn vel_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }

    /// Solver motion: unlike `set_pos` this does not touch `prev_pos`.
    pub(crate) fn translate(&mut self, axis: Axis, delta: f32) {
        *self.pos.get_mut(axis) += delta;
    }
}
