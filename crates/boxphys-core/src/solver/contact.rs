// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Friction and bounce forces derived from this tick's collisions.
//!
//! Both stages only queue forces; they take effect at the next tick's force
//! resolution.

use crate::concrete::Concrete;
use crate::entity::Entity;
use crate::event::{Contact, EventLog};

/// Applies sliding friction along the axis perpendicular to each collision.
///
/// The force opposes the relative velocity and scales with the product of both
/// friction coefficients and the receiving entity's mass.
pub(crate) fn apply_friction(entities: &mut [Entity], concretes: &[Concrete], log: &EventLog) {
    for event in log.collisions() {
        let along = event.axis().perpendicular();
        match event.contact() {
            Contact::EntityConcrete { entity, concrete } => {
                let concrete = &concretes[concrete.index()];
                let entity = &mut entities[entity.index()];
                let friction = concrete.friction() * entity.friction();
                let relative = entity.vel().get(along) - concrete.vel().get(along);
                let force = -entity.mass() * friction * relative;
                entity.apply_force_on(along, force);
            }
            Contact::Entities(a, b) => {
                let (ea, eb) = (&entities[a.index()], &entities[b.index()]);
                let friction = ea.friction() * eb.friction();
                let relative = ea.vel().get(along) - eb.vel().get(along);
                let force_a = -ea.mass() * friction * relative;
                let force_b = eb.mass() * friction * relative;
                entities[a.index()].apply_force_on(along, force_a);
                entities[b.index()].apply_force_on(along, force_b);
            }
        }
    }
}

/// Resists the relative velocity of colliding entities along the event axis.
///
/// The resistance factor is `1 - bouncy_a * bouncy_b`: two fully bouncy
/// entities keep their velocities. Concretes have no bounce.
pub(crate) fn apply_bounce(entities: &mut [Entity], log: &EventLog) {
    for event in log.collisions() {
        let Contact::Entities(a, b) = event.contact() else {
            continue;
        };
        let axis = event.axis();
        let (ea, eb) = (&entities[a.index()], &entities[b.index()]);
        let resist = 1.0 - ea.bouncy() * eb.bouncy();
        let relative = ea.vel().get(axis) - eb.vel().get(axis);
        entities[a.index()].apply_force_on(axis, -resist * relative);
        entities[b.index()].apply_force_on(axis, resist * relative);
    }
}
