// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Force integration: accumulated force, drag, gravity, speed limit.

use crate::config::SpaceConfig;
use crate::entity::Entity;

/// Converts each entity's pending force into velocity and resets per-tick state.
///
/// Per axis: `vel += force / mass`, then drag. Gravity is subtracted from the
/// vertical velocity after drag, so it is never damped in the same tick.
/// Both components are then clamped to the axis speed limit.
pub(crate) fn resolve_forces(entities: &mut [Entity], config: &SpaceConfig) {
    for entity in entities {
        entity.hits.clear();
        let mass = entity.mass();
        let drag = entity.drag_coefficient();
        let force = entity.force;
        let air = config.air_resistance;
        let limit = config.axis_speed_limit;

        let vel = entity.body.vel_mut();
        vel.x = apply_drag(vel.x + force.x / mass, drag, air, mass);
        vel.y = apply_drag(vel.y + force.y / mass, drag, air, mass) - config.gravity;
        vel.x = clamp_speed(vel.x, limit);
        vel.y = clamp_speed(vel.y, limit);

        entity.force = boxphys_geom::Vec2::ZERO;
    }
}

/// Linear drag that may stop a body but never reverses it.
pub(crate) fn apply_drag(vel: f32, drag_coefficient: f32, air_resistance: f32, mass: f32) -> f32 {
    let change = drag_coefficient * air_resistance * vel / mass;
    if change.abs() >= vel.abs() {
        0.0
    } else {
        vel - change
    }
}

// Comparisons instead of `f32::clamp`, which panics on a negative limit.
fn clamp_speed(vel: f32, limit: f32) -> f32 {
    if vel > limit {
        limit
    } else if vel < -limit {
        -limit
    } else {
        vel
    }
}
