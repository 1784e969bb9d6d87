// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-tick event records.
//!
//! Events are produced by the detection passes of one tick, consumed by the
//! friction and bounce passes of the same tick, then handed to the caller in
//! a [`TickReport`]. The space holds them until its next update.

use boxphys_geom::{Axis, Overlap};

use crate::concrete::ConcreteId;
use crate::entity::EntityId;
use crate::object::ObjectId;
use crate::tick::Tick;

/// The two parties of a collision.
///
/// Concretes never collide with each other, so only these shapes exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Contact {
    /// An entity resolved against a concrete.
    EntityConcrete {
        /// The moving party.
        entity: EntityId,
        /// The obstacle.
        concrete: ConcreteId,
    },
    /// Two overlapping entities, in scan order.
    Entities(EntityId, EntityId),
}

/// One overlap detected during a tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollisionEvent {
    contact: Contact,
    overlap: Overlap,
    axis: Axis,
}

impl CollisionEvent {
    /// An entity/concrete collision resolved on `axis`.
    #[must_use]
    pub const fn with_concrete(
        entity: EntityId,
        concrete: ConcreteId,
        overlap: Overlap,
        axis: Axis,
    ) -> Self {
        Self {
            contact: Contact::EntityConcrete { entity, concrete },
            overlap,
            axis,
        }
    }

    /// An entity/entity collision to be separated along `axis`.
    #[must_use]
    pub const fn between_entities(a: EntityId, b: EntityId, overlap: Overlap, axis: Axis) -> Self {
        Self {
            contact: Contact::Entities(a, b),
            overlap,
            axis,
        }
    }

    /// Who collided.
    #[must_use]
    pub const fn contact(&self) -> Contact {
        self.contact
    }

    /// Penetration depth, epsilon included.
    #[must_use]
    pub const fn overlap(&self) -> Overlap {
        self.overlap
    }

    /// Axis the collision was resolved (or will be separated) on.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Both parties in recorded order; the entity comes first for mixed pairs.
    #[must_use]
    pub const fn parties(&self) -> (ObjectId, ObjectId) {
        match self.contact {
            Contact::EntityConcrete { entity, concrete } => {
                (ObjectId::Entity(entity), ObjectId::Concrete(concrete))
            }
            Contact::Entities(a, b) => (ObjectId::Entity(a), ObjectId::Entity(b)),
        }
    }

    /// `true` if one party is a concrete.
    #[must_use]
    pub const fn has_concrete(&self) -> bool {
        matches!(self.contact, Contact::EntityConcrete { .. })
    }

    /// `true` if at least one party is an entity (always, by construction).
    #[must_use]
    pub const fn has_entity(&self) -> bool {
        matches!(
            self.contact,
            Contact::EntityConcrete { .. } | Contact::Entities(..)
        )
    }

    /// `true` if this event is between `a` and `b`, in either order.
    #[must_use]
    pub fn involves(&self, a: ObjectId, b: ObjectId) -> bool {
        let (p, q) = self.parties();
        (p == a && q == b) || (p == b && q == a)
    }

    /// The concrete party, if any.
    #[must_use]
    pub const fn try_concrete(&self) -> Option<ConcreteId> {
        match self.contact {
            Contact::EntityConcrete { concrete, .. } => Some(concrete),
            Contact::Entities(..) => None,
        }
    }

    /// The concrete party.
    ///
    /// # Panics
    /// Panics if neither party is a concrete. Check
    /// [`CollisionEvent::has_concrete`] or use [`CollisionEvent::try_concrete`].
    #[must_use]
    #[allow(clippy::panic)]
    pub fn concrete(&self) -> ConcreteId {
        match self.try_concrete() {
            Some(id) => id,
            None => panic!("no concrete party in collision event {:?}", self.contact),
        }
    }

    /// The entity party (the first one for entity/entity pairs).
    #[must_use]
    pub const fn try_entity(&self) -> Option<EntityId> {
        match self.contact {
            Contact::EntityConcrete { entity, .. } | Contact::Entities(entity, _) => Some(entity),
        }
    }

    /// The entity party (the first one for entity/entity pairs).
    ///
    /// Never panics today: every contact shape contains an entity. Kept
    /// symmetric with [`CollisionEvent::concrete`].
    #[must_use]
    pub const fn entity(&self) -> EntityId {
        match self.contact {
            Contact::EntityConcrete { entity, .. } | Contact::Entities(entity, _) => entity,
        }
    }

    /// Both entities for an entity/entity event.
    #[must_use]
    pub const fn entity_pair(&self) -> Option<(EntityId, EntityId)> {
        match self.contact {
            Contact::Entities(a, b) => Some((a, b)),
            Contact::EntityConcrete { .. } => None,
        }
    }
}

/// Anything the space reports about a tick.
///
/// Only collisions exist today; new kinds get their own variant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub enum SpaceEvent {
    /// See [`CollisionEvent`].
    Collision(CollisionEvent),
}

impl SpaceEvent {
    /// The collision payload, if this is a collision.
    #[must_use]
    pub const fn as_collision(&self) -> Option<&CollisionEvent> {
        match self {
            Self::Collision(c) => Some(c),
        }
    }
}

/// Event list owned by a single tick's execution.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    events: Vec<SpaceEvent>,
}

impl EventLog {
    pub(crate) fn push_collision(&mut self, event: CollisionEvent) {
        self.events.push(SpaceEvent::Collision(event));
    }

    pub(crate) fn collisions(&self) -> impl Iterator<Item = &CollisionEvent> + '_ {
        self.events.iter().filter_map(SpaceEvent::as_collision)
    }

    pub(crate) fn contains_pair(&self, a: ObjectId, b: ObjectId) -> bool {
        self.collisions().any(|c| c.involves(a, b))
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn into_events(self) -> Vec<SpaceEvent> {
        self.events
    }
}

/// Outcome of one [`crate::Space::update`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// The tick that just ran.
    pub tick: Tick,
    /// Events in detection order: X pass, Y pass, then entity pairs.
    pub events: Vec<SpaceEvent>,
}

impl TickReport {
    /// Iterates the collision events.
    pub fn collisions(&self) -> impl Iterator<Item = &CollisionEvent> + '_ {
        self.events.iter().filter_map(SpaceEvent::as_collision)
    }
}
