// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The closed set of object kinds a space holds.

use crate::body::Body;
use crate::concrete::{Concrete, ConcreteId};
use crate::entity::{Entity, EntityId};

/// Discriminant shared by objects and their handles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Movable, force-driven body.
    Entity,
    /// Static or kinematic obstacle.
    Concrete,
}

/// An object ready to be added to a [`crate::Space`].
#[derive(Debug)]
pub enum PhysObj {
    /// See [`Entity`].
    Entity(Entity),
    /// See [`Concrete`].
    Concrete(Concrete),
}

impl PhysObj {
    /// Which kind of object this is.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Entity(_) => ObjectKind::Entity,
            Self::Concrete(_) => ObjectKind::Concrete,
        }
    }

    /// Shared positional state.
    #[must_use]
    pub fn body(&self) -> &Body {
        match self {
            Self::Entity(e) => e.body(),
            Self::Concrete(c) => c.body(),
        }
    }
}

impl From<Entity> for PhysObj {
    fn from(e: Entity) -> Self {
        Self::Entity(e)
    }
}

impl From<Concrete> for PhysObj {
    fn from(c: Concrete) -> Self {
        Self::Concrete(c)
    }
}

/// Handle to any object in a space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectId {
    /// Handle to an entity.
    Entity(EntityId),
    /// Handle to a concrete.
    Concrete(ConcreteId),
}

impl ObjectId {
    /// Which kind of object this handle refers to.
    #[must_use]
    pub const fn kind(self) -> ObjectKind {
        match self {
            Self::Entity(_) => ObjectKind::Entity,
            Self::Concrete(_) => ObjectKind::Concrete,
        }
    }

    /// The entity handle, if this refers to one.
    #[must_use]
    pub const fn as_entity(self) -> Option<EntityId> {
        match self {
            Self::Entity(id) => Some(id),
            Self::Concrete(_) => None,
        }
    }

    /// The concrete handle, if this refers to one.
    #[must_use]
    pub const fn as_concrete(self) -> Option<ConcreteId> {
        match self {
            Self::Concrete(id) => Some(id),
            Self::Entity(_) => None,
        }
    }
}

impl From<EntityId> for ObjectId {
    fn from(id: EntityId) -> Self {
        Self::Entity(id)
    }
}

impl From<ConcreteId> for ObjectId {
    fn from(id: ConcreteId) -> Self {
        Self::Concrete(id)
    }
}

/// Borrowed view of any object, as yielded by [`crate::Space::objects`].
#[derive(Debug, Copy, Clone)]
pub enum ObjectRef<'a> {
    /// Borrowed entity.
    Entity(EntityId, &'a Entity),
    /// Borrowed concrete.
    Concrete(ConcreteId, &'a Concrete),
}

impl ObjectRef<'_> {
    /// Handle of the borrowed object.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        match self {
            Self::Entity(id, _) => ObjectId::Entity(*id),
            Self::Concrete(id, _) => ObjectId::Concrete(*id),
        }
    }

    /// Shared positional state.
    #[must_use]
    pub fn body(&self) -> &Body {
        match self {
            Self::Entity(_, e) => e.body(),
            Self::Concrete(_, c) => c.body(),
        }
    }
}
