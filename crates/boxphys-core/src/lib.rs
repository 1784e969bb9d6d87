// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! boxphys-core: deterministic fixed-step AABB physics for 2D worlds.
//!
//! A [`Space`] holds two kinds of object. [`Entity`] bodies have mass and are
//! moved by forces; [`Concrete`] obstacles are static or kinematic and are
//! never pushed. Each call to [`Space::update`] runs one tick: integrate
//! forces, resolve entities out of concretes one axis at a time, push
//! overlapping entities apart, then queue friction and bounce forces for the
//! next tick.
//!
//! Coordinates are `f32`, positions are box minimum corners, and `y` grows
//! upward (gravity is subtracted from vertical velocity).
//!
//! ```
//! use boxphys_core::{Concrete, Entity, Hitbox, Space, Vec2};
//!
//! let mut space = Space::new();
//! space.add(Concrete::new(Vec2::new(0.0, 0.0), Hitbox::new(100.0, 10.0)));
//! let player = space.add_entity(Entity::new(Vec2::new(0.0, 30.0), Hitbox::new(10.0, 10.0), 1.0));
//! for _ in 0..120 {
//!     space.update();
//! }
//! assert!(space.entity(player).is_some_and(Entity::grounded));
//! ```
#![forbid(unsafe_code)]

mod body;
mod concrete;
mod config;
mod entity;
mod error;
mod event;
mod hook;
mod object;
mod solver;
mod space;
mod tick;

/// Shared positional state.
pub use body::Body;
/// Static and kinematic obstacles.
pub use concrete::{Concrete, ConcreteId};
/// Simulation constants.
pub use config::{ConfigError, SpaceConfig};
/// Movable bodies.
pub use entity::{Entity, EntityId, HitFlags};
/// Object construction errors.
pub use error::ObjectError;
/// Per-tick event records.
pub use event::{CollisionEvent, Contact, SpaceEvent, TickReport};
/// Per-object scripts.
pub use hook::Script;
/// Object kinds and handles.
pub use object::{ObjectId, ObjectKind, ObjectRef, PhysObj};
/// The world container.
pub use space::{Space, SpaceId};
/// Tick counter.
pub use tick::Tick;

/// Geometry re-exports so callers need a single dependency.
pub use boxphys_geom::{Axis, Hitbox, Overlap, Rect, Vec2};

/// Creates a space with default constants.
#[must_use]
pub fn create_space() -> Space {
    Space::new()
}

/// Registers `object` with `space`; see [`Space::add`].
pub fn add_object(space: &mut Space, object: impl Into<PhysObj>) -> ObjectId {
    space.add(object)
}

/// Hypothetical placement query; see [`Space::would_collide`].
#[must_use]
pub fn would_collide_with_any(space: &Space, pos: Vec2, hitbox: Hitbox) -> bool {
    space.would_collide(pos, hitbox)
}
