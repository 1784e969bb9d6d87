// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Movable, force-driven bodies.

use boxphys_geom::{Axis, Hitbox, Vec2};

use crate::body::Body;
use crate::error::{check_unit, ObjectError};
use crate::hook::{run_slot, Script, ScriptSlot};

/// Stable handle to an entity within its space (insertion index).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    /// Insertion index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Which sides touched a concrete during the most recent tick.
///
/// Horizontal flags follow the solver's historical convention: an entity
/// moving right (positive relative velocity) into a concrete sets `left`, any
/// other horizontal contact sets `right`. Vertically, moving up sets `up` and
/// everything else sets `down`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct HitFlags {
    /// Top contact.
    pub up: bool,
    /// Bottom contact (standing on something).
    pub down: bool,
    /// See type docs.
    pub left: bool,
    /// See type docs.
    pub right: bool,
}

impl HitFlags {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record(&mut self, axis: Axis, velocity_difference: f32) {
        let positive = velocity_difference > 0.0;
        match (axis, positive) {
            (Axis::X, true) => self.left = true,
            (Axis::X, false) => self.right = true,
            (Axis::Y, true) => self.up = true,
            (Axis::Y, false) => self.down = true,
        }
    }
}

/// A movable body with mass that responds to forces and collisions.
#[derive(Debug)]
pub struct Entity {
    pub(crate) body: Body,
    mass: f32,
    pub(crate) force: Vec2,
    friction: f32,
    drag_coefficient: f32,
    bouncy: f32,
    pub(crate) hits: HitFlags,
    pub(crate) pre_collided: bool,
    script: ScriptSlot<Entity>,
}

impl Entity {
    /// Default sliding friction.
    pub const DEFAULT_FRICTION: f32 = 0.5;
    /// Default drag coefficient.
    pub const DEFAULT_DRAG: f32 = 0.5;
    /// Default bounciness (none).
    pub const DEFAULT_BOUNCY: f32 = 0.0;

    /// Creates an entity at rest with default material coefficients.
    ///
    /// # Panics
    /// Panics if `mass` is not finite and strictly positive.
    #[must_use]
    pub fn new(pos: Vec2, hitbox: Hitbox, mass: f32) -> Self {
        assert!(mass.is_finite() && mass > 0.0, "invalid entity mass: {mass}");
        Self::build(pos, hitbox, mass)
    }

    /// Fallible constructor for objects described by external data.
    pub fn try_new(pos: Vec2, width: f32, height: f32, mass: f32) -> Result<Self, ObjectError> {
        if !pos.is_finite() {
            return Err(ObjectError::NotFinite("position"));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ObjectError::InvalidMass(mass));
        }
        let hitbox = Hitbox::try_new(width, height)?;
        Ok(Self::build(pos, hitbox, mass))
    }

    fn build(pos: Vec2, hitbox: Hitbox, mass: f32) -> Self {
        Self {
            body: Body::new(pos, hitbox),
            mass,
            force: Vec2::ZERO,
            friction: Self::DEFAULT_FRICTION,
            drag_coefficient: Self::DEFAULT_DRAG,
            bouncy: Self::DEFAULT_BOUNCY,
            hits: HitFlags::default(),
            pre_collided: false,
            script: ScriptSlot::empty(),
        }
    }

    /// Sets the sliding friction coefficient.
    #[must_use]
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the drag coefficient.
    #[must_use]
    pub fn with_drag(mut self, drag_coefficient: f32) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    /// Sets bounciness; `1.0` means no resistance in entity/entity contact.
    #[must_use]
    pub fn with_bouncy(mut self, bouncy: f32) -> Self {
        self.bouncy = bouncy;
        self
    }

    /// Sets the initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.body.set_vel(vel);
        self
    }

    /// Attaches a per-tick script.
    #[must_use]
    pub fn with_script(mut self, f: impl FnMut(&mut Entity) + 'static) -> Self {
        self.script.set(Some(Script::new(f)));
        self
    }

    /// Replaces (or removes) the per-tick script.
    ///
    /// Called from inside the running script, the new value sticks.
    pub fn set_script(&mut self, script: Option<Script<Entity>>) {
        self.script.set(script);
    }

    /// Whether a per-tick script is attached.
    #[must_use]
    pub fn has_script(&self) -> bool {
        self.script.is_set()
    }

    /// Checks velocity and material coefficients.
    ///
    /// Mass and hitbox are already guaranteed by construction.
    pub fn validate(&self) -> Result<(), ObjectError> {
        if !self.body.vel().is_finite() {
            return Err(ObjectError::NotFinite("velocity"));
        }
        check_unit("friction", self.friction)?;
        check_unit("drag_coefficient", self.drag_coefficient)?;
        check_unit("bouncy", self.bouncy)
    }

    /// Adds to the force resolved at the start of the next tick.
    pub fn apply_force(&mut self, fx: f32, fy: f32) {
        self.force += Vec2::new(fx, fy);
    }

    pub(crate) fn apply_force_on(&mut self, axis: Axis, f: f32) {
        *self.force.get_mut(axis) += f;
    }

    /// `true` if the entity landed on a concrete during the last tick.
    #[must_use]
    pub fn grounded(&self) -> bool {
        self.hits.down
    }

    /// Contact sides from the last tick.
    #[must_use]
    pub fn hits(&self) -> HitFlags {
        self.hits
    }

    /// `true` if the entity started the last tick inside a concrete.
    #[must_use]
    pub fn pre_collided(&self) -> bool {
        self.pre_collided
    }

    /// Force accumulated since the last tick.
    #[must_use]
    pub fn pending_force(&self) -> Vec2 {
        self.force
    }

    /// Mass.
    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sliding friction coefficient.
    #[must_use]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Drag coefficient.
    #[must_use]
    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    /// Bounciness.
    #[must_use]
    pub fn bouncy(&self) -> f32 {
        self.bouncy
    }

    /// Shared positional state.
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable positional state (teleport, velocity overrides).
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
        run_slot(self, |e| &mut e.script);
    }
}
