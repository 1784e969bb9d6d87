// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immovable or kinematically animated obstacles.

use boxphys_geom::{Hitbox, Vec2};

use crate::body::Body;
use crate::error::{check_unit, ObjectError};
use crate::hook::{run_slot, Script, ScriptSlot};

/// Stable handle to a concrete within its space (insertion index).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConcreteId(pub(crate) usize);

impl ConcreteId {
    /// Insertion index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An obstacle entities cannot end a tick inside.
///
/// Concretes move by their own velocity and are never pushed by collisions.
/// They do not collide with each other.
#[derive(Debug)]
pub struct Concrete {
    pub(crate) body: Body,
    friction: f32,
    script: ScriptSlot<Concrete>,
}

impl Concrete {
    /// Default surface friction.
    pub const DEFAULT_FRICTION: f32 = 0.1;

    /// Creates a stationary concrete.
    #[must_use]
    pub fn new(pos: Vec2, hitbox: Hitbox) -> Self {
        Self {
            body: Body::new(pos, hitbox),
            friction: Self::DEFAULT_FRICTION,
            script: ScriptSlot::empty(),
        }
    }

    /// Fallible constructor for objects described by external data.
    pub fn try_new(pos: Vec2, width: f32, height: f32) -> Result<Self, ObjectError> {
        if !pos.is_finite() {
            return Err(ObjectError::NotFinite("position"));
        }
        Ok(Self::new(pos, Hitbox::try_new(width, height)?))
    }

    /// Sets the surface friction coefficient.
    #[must_use]
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Sets a constant kinematic velocity.
    #[must_use]
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.body.set_vel(vel);
        self
    }

    /// Attaches a per-tick script, e.g. to animate the obstacle.
    #[must_use]
    pub fn with_script(mut self, f: impl FnMut(&mut Concrete) + 'static) -> Self {
        self.script.set(Some(Script::new(f)));
        self
    }

    /// Replaces (or removes) the per-tick script.
    ///
    /// Called from inside the running script, the new value sticks.
    pub fn set_script(&mut self, script: Option<Script<Concrete>>) {
        self.script.set(script);
    }

    /// Whether a per-tick script is attached.
    #[must_use]
    pub fn has_script(&self) -> bool {
        self.script.is_set()
    }

    /// Overwrites the kinematic velocity.
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.body.set_vel(vel);
    }

    /// Checks velocity and friction.
    pub fn validate(&self) -> Result<(), ObjectError> {
        if !self.body.vel().is_finite() {
            return Err(ObjectError::NotFinite("velocity"));
        }
        check_unit("friction", self.friction)
    }

    /// Surface friction coefficient.
    #[must_use]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Shared positional state.
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable positional state.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Shorthand for `body().pos()`.
    #[must_use]
    pub fn pos(&self) -> Vec2 {
        self.body.pos()
    }

    /// Shorthand for `body().vel()`.
    #[must_use]
    pub fn vel(&self) -> Vec2 {
        self.body.vel()
    }

    pub(crate) fn run_script(&mut self) {
        run_slot(self, |c| &mut c.script);
    }
}
