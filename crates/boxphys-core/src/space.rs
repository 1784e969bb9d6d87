// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The world container and its per-tick update pipeline.

use core::sync::atomic::{AtomicU64, Ordering};

use boxphys_geom::{Axis, Hitbox, Vec2};
use tracing::{debug, instrument, trace};

use crate::body::Body;
use crate::concrete::{Concrete, ConcreteId};
use crate::config::SpaceConfig;
use crate::entity::{Entity, EntityId};
use crate::event::{EventLog, SpaceEvent, TickReport};
use crate::object::{ObjectId, ObjectRef, PhysObj};
use crate::solver::{concretes, contact, entities, forces};
use crate::tick::Tick;

static NEXT_SPACE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Space`], stored in each member's body.
///
/// Only used to answer "which space owns this object"; it never influences
/// simulation results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SpaceId(u64);

impl SpaceId {
    fn fresh() -> Self {
        Self(NEXT_SPACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Owns all entities and concretes and advances them one tick at a time.
///
/// Objects are stored in insertion order and every pass walks them in that
/// order, so identical inputs and call sequences give identical results.
#[derive(Debug)]
pub struct Space {
    id: SpaceId,
    config: SpaceConfig,
    entities: Vec<Entity>,
    concretes: Vec<Concrete>,
    events: Vec<SpaceEvent>,
    tick: Tick,
}

impl Default for Space {
    fn default() -> Self {
        Self::new()
    }
}

impl Space {
    /// Creates an empty space with [`SpaceConfig::default`] constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SpaceConfig::default())
    }

    /// Creates an empty space with the given constants.
    #[must_use]
    pub fn with_config(config: SpaceConfig) -> Self {
        Self {
            id: SpaceId::fresh(),
            config,
            entities: Vec::new(),
            concretes: Vec::new(),
            events: Vec::new(),
            tick: Tick::default(),
        }
    }

    /// This space's identity.
    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Simulation constants.
    #[must_use]
    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Mutable simulation constants; changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut SpaceConfig {
        &mut self.config
    }

    /// The tick the next [`Space::update`] will run.
    #[must_use]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Adds an entity or concrete; it takes part in every later tick.
    pub fn add(&mut self, object: impl Into<PhysObj>) -> ObjectId {
        match object.into() {
            PhysObj::Entity(e) => ObjectId::Entity(self.add_entity(e)),
            PhysObj::Concrete(c) => ObjectId::Concrete(self.add_concrete(c)),
        }
    }

    /// Adds an entity and returns its handle.
    pub fn add_entity(&mut self, mut entity: Entity) -> EntityId {
        entity.body.attach(self.id);
        let id = EntityId(self.entities.len());
        debug!(entity = id.index(), pos = ?entity.pos(), "entity added");
        self.entities.push(entity);
        id
    }

    /// Adds a concrete and returns its handle.
    pub fn add_concrete(&mut self, mut concrete: Concrete) -> ConcreteId {
        concrete.body.attach(self.id);
        let id = ConcreteId(self.concretes.len());
        debug!(concrete = id.index(), pos = ?concrete.pos(), "concrete added");
        self.concretes.push(concrete);
        id
    }

    /// All entities in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// All concretes in insertion order.
    #[must_use]
    pub fn concretes(&self) -> &[Concrete] {
        &self.concretes
    }

    /// Events from the most recent [`Space::update`], empty before the first.
    #[must_use]
    pub fn events(&self) -> &[SpaceEvent] {
        &self.events
    }

    /// Every object: entities first, then concretes.
    pub fn objects(&self) -> impl Iterator<Item = ObjectRef<'_>> + '_ {
        let entities = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, e)| ObjectRef::Entity(EntityId(i), e));
        let concretes = self
            .concretes
            .iter()
            .enumerate()
            .map(|(i, c)| ObjectRef::Concrete(ConcreteId(i), c));
        entities.chain(concretes)
    }

    /// Looks up an entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Looks up an entity for mutation (forces, scripts, teleports).
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Looks up a concrete.
    #[must_use]
    pub fn concrete(&self, id: ConcreteId) -> Option<&Concrete> {
        self.concretes.get(id.index())
    }

    /// Looks up a concrete for mutation (kinematic animation).
    pub fn concrete_mut(&mut self, id: ConcreteId) -> Option<&mut Concrete> {
        self.concretes.get_mut(id.index())
    }

    /// Would a box of `hitbox` at `pos` overlap any concrete?
    ///
    /// Uses a throwaway probe that is never added to the space; entities are
    /// ignored.
    #[must_use]
    pub fn would_collide(&self, pos: Vec2, hitbox: Hitbox) -> bool {
        let probe = Body::new(pos, hitbox);
        concretes::touches_any(&probe, &self.concretes)
    }

    /// Advances the simulation by exactly one tick.
    ///
    /// Stages run in a fixed order: forces, pre-collision marking, X pass,
    /// Y pass, entity detection and push-apart, friction, bounce, then every
    /// object's script (entities first). The previous tick's events are
    /// dropped first; the new ones stay readable through [`Space::events`]
    /// and are also returned in the report.
    #[instrument(level = "trace", name = "tick", skip(self), fields(tick = self.tick.index()))]
    pub fn update(&mut self) -> TickReport {
        let tick = self.tick;
        self.events.clear();

        let mut log = EventLog::default();
        forces::resolve_forces(&mut self.entities, &self.config);
        concretes::mark_precollisions(&mut self.entities, &self.concretes);
        for axis in Axis::ALL {
            concretes::move_axis(axis, &mut self.entities, &mut self.concretes, &mut log);
        }
        entities::detect(&self.entities, &mut log);
        entities::push_apart(&mut self.entities, &log, self.config.collision_coefficient);
        contact::apply_friction(&mut self.entities, &self.concretes, &log);
        contact::apply_bounce(&mut self.entities, &log);
        self.custom_updates();

        trace!(events = log.len(), "tick complete");
        self.tick = tick.next();
        self.events = log.into_events();
        TickReport {
            tick,
            events: self.events.clone(),
        }
    }

    fn custom_updates(&mut self) {
        for entity in &mut self.entities {
            entity.run_script();
        }
        for concrete in &mut self.concretes {
            concrete.run_script();
        }
    }
}
