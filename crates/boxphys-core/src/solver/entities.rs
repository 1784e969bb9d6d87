// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Entity/entity detection and push-apart.

use crate::entity::{Entity, EntityId};
use crate::event::{CollisionEvent, EventLog};

/// Records one event per overlapping entity pair.
///
/// All-pairs scan over insertion order; each unordered pair is visited once.
/// The separating axis is the one with the smaller overlap.
pub(crate) fn detect(entities: &[Entity], log: &mut EventLog) {
    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            let (ia, ib) = (EntityId(i), EntityId(j));
            if log.contains_pair(ia.into(), ib.into()) {
                continue;
            }
            if !a.body().is_collided_with(b.body()) {
                continue;
            }
            let overlap = a.body().collision_rect(b.body());
            log.push_collision(CollisionEvent::between_entities(
                ia,
                ib,
                overlap,
                overlap.smaller_axis(),
            ));
        }
    }
}

/// Applies equal and opposite forces separating every recorded entity pair.
///
/// Magnitude is `overlap * collision_coefficient` on the event's axis; the
/// entity with the smaller coordinate is pushed toward negative. Mass plays
/// no part here, only later when the force is integrated.
pub(crate) fn push_apart(entities: &mut [Entity], log: &EventLog, collision_coefficient: f32) {
    for event in log.collisions() {
        let Some((one, two)) = event.entity_pair() else {
            continue;
        };
        let axis = event.axis();
        let push = event.overlap().get(axis) * collision_coefficient;
        let (low, high) =
            if entities[one.index()].pos().get(axis) < entities[two.index()].pos().get(axis) {
                (one, two)
            } else {
                (two, one)
            };
        entities[low.index()].apply_force_on(axis, -push);
        entities[high.index()].apply_force_on(axis, push);
    }
}
