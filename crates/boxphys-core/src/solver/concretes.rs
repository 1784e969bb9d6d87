// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Entity/concrete resolution, one axis at a time.

use boxphys_geom::{Axis, Overlap};
use tracing::debug;

use crate::body::Body;
use crate::concrete::{Concrete, ConcreteId};
use crate::entity::{Entity, EntityId};
use crate::event::{CollisionEvent, EventLog};

/// Distance an entity found inside a concrete is moved down before moving.
///
/// Known limitation: nothing guarantees the entity ever leaves the concrete if
/// the overlap is deeper than what one unit per tick plus forces can undo.
pub(crate) const PRECOLLISION_NUDGE: f32 = 1.0;

/// Returns `true` if `body` overlaps any concrete.
pub(crate) fn touches_any(body: &Body, concretes: &[Concrete]) -> bool {
    concretes.iter().any(|c| body.is_collided_with(c.body()))
}

/// Flags entities that start the tick inside a concrete and nudges them down.
///
/// Flagged entities skip concrete resolution for the rest of the tick.
pub(crate) fn mark_precollisions(entities: &mut [Entity], concretes: &[Concrete]) {
    for (index, entity) in entities.iter_mut().enumerate() {
        let inside = touches_any(entity.body(), concretes);
        entity.pre_collided = inside;
        if inside {
            entity.body.translate(Axis::Y, -PRECOLLISION_NUDGE);
            debug!(entity = index, "precollision detected");
        }
    }
}

/// Concretes currently overlapping `body`, in insertion order.
pub(crate) fn collided_concretes(body: &Body, concretes: &[Concrete]) -> Vec<ConcreteId> {
    concretes
        .iter()
        .enumerate()
        .filter(|(_, c)| body.is_collided_with(c.body()))
        .map(|(i, _)| ConcreteId(i))
        .collect()
}

/// The candidate with the deepest overlap on `axis`, with its overlap.
///
/// Ties keep the earliest candidate. Returns `None` only for an empty list.
pub(crate) fn deepest_on_axis(
    body: &Body,
    concretes: &[Concrete],
    candidates: &[ConcreteId],
    axis: Axis,
) -> Option<(ConcreteId, Overlap)> {
    let mut best: Option<(ConcreteId, Overlap)> = None;
    for &id in candidates {
        let overlap = body.collision_rect(concretes[id.index()].body());
        match best {
            Some((_, deepest)) if overlap.get(axis) <= deepest.get(axis) => {}
            _ => best = Some((id, overlap)),
        }
    }
    best
}

/// Moves every object along `axis` and resolves entities against concretes.
///
/// Concretes move first and are never corrected. Each entity that is not
/// pre-collided and ends up inside one or more concretes is pushed out of the
/// deepest one, takes that concrete's velocity on this axis, and gets a
/// hit flag and a collision event.
pub(crate) fn move_axis(
    axis: Axis,
    entities: &mut [Entity],
    concretes: &mut [Concrete],
    log: &mut EventLog,
) {
    for concrete in concretes.iter_mut() {
        let step = concrete.vel().get(axis);
        concrete.body.translate(axis, step);
    }

    for (index, entity) in entities.iter_mut().enumerate() {
        let step = entity.vel().get(axis);
        entity.body.translate(axis, step);

        if entity.pre_collided {
            continue;
        }

        let candidates = collided_concretes(entity.body(), concretes);
        let Some((id, overlap)) = deepest_on_axis(entity.body(), concretes, &candidates, axis)
        else {
            continue;
        };

        let concrete_vel = concretes[id.index()].vel().get(axis);
        let velocity_difference = entity.vel().get(axis) - concrete_vel;
        entity.hits.record(axis, velocity_difference);
        log.push_collision(CollisionEvent::with_concrete(
            EntityId(index),
            id,
            overlap,
            axis,
        ));

        entity
            .body
            .translate(axis, -overlap.get(axis).copysign(velocity_difference));
        entity.body.vel_mut().set(axis, concrete_vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxphys_geom::{Hitbox, Vec2};

    fn slab(x: f32, y: f32, w: f32, h: f32) -> Concrete {
        Concrete::new(Vec2::new(x, y), Hitbox::new(w, h))
    }

    #[test]
    fn deepest_prefers_first_on_ties() {
        let concretes = vec![slab(0.0, 0.0, 10.0, 10.0), slab(0.0, 0.0, 10.0, 10.0)];
        let probe = Body::new(Vec2::new(2.0, 2.0), Hitbox::new(2.0, 2.0));
        let candidates = collided_concretes(&probe, &concretes);
        assert_eq!(candidates, vec![ConcreteId(0), ConcreteId(1)]);
        let (id, _) = deepest_on_axis(&probe, &concretes, &candidates, Axis::X).unwrap();
        assert_eq!(id, ConcreteId(0));
    }

    #[test]
    fn deepest_picks_largest_axis_overlap() {
        // Second slab swallows more of the probe horizontally.
        let concretes = vec![slab(0.0, 0.0, 3.0, 10.0), slab(3.0, 0.0, 10.0, 10.0)];
        let probe = Body::new(Vec2::new(2.0, 2.0), Hitbox::new(4.0, 2.0));
        let candidates = collided_concretes(&probe, &concretes);
        let best = deepest_on_axis(&probe, &concretes, &candidates, Axis::X);
        assert_eq!(best.map(|(id, _)| id), Some(ConcreteId(1)));
        assert_eq!(deepest_on_axis(&probe, &concretes, &[], Axis::X), None);
    }

    #[test]
    fn precollided_entities_are_nudged_and_skipped() {
        let concretes = vec![slab(0.0, 0.0, 100.0, 10.0)];
        let mut entities = vec![Entity::new(Vec2::new(0.0, 5.0), Hitbox::new(10.0, 10.0), 1.0)];
        mark_precollisions(&mut entities, &concretes);
        assert!(entities[0].pre_collided());
        assert_eq!(entities[0].pos().y, 4.0);

        let mut concretes = concretes;
        let mut log = EventLog::default();
        move_axis(Axis::Y, &mut entities, &mut concretes, &mut log);
        assert_eq!(log.len(), 0);
        assert_eq!(entities[0].hits(), crate::entity::HitFlags::default());
    }
}
