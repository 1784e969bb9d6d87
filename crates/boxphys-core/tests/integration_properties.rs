// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Property tests for force integration.

use boxphys_core::{Entity, Hitbox, Space, SpaceConfig, Vec2};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

fn finite(bound: f32) -> impl Strategy<Value = f32> {
    -bound..bound
}

proptest! {
    #[test]
    fn velocity_is_clamped_for_any_force(
        fx in finite(1.0e6),
        fy in finite(1.0e6),
        mass in 0.01f32..100.0,
        limit in 1.0f32..200.0,
    ) {
        let mut space = Space::with_config(SpaceConfig {
            axis_speed_limit: limit,
            ..SpaceConfig::default()
        });
        let id = space.add_entity(Entity::new(Vec2::ZERO, Hitbox::new(1.0, 1.0), mass));
        space.entity_mut(id).unwrap().apply_force(fx, fy);
        space.update();
        let v = space.entity(id).unwrap().vel();
        prop_assert!(v.x.abs() <= limit);
        prop_assert!(v.y.abs() <= limit);
    }
}

// Pinned seed so a failure reproduces on every machine.
#[test]
fn drag_never_reverses_velocity() {
    const SEED_BYTES: [u8; 32] = [
        0x0b, 0x0f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    let strategy = (
        finite(90.0),
        finite(90.0),
        0.0f32..=1.0,
        0.0f32..=1.0,
        0.05f32..10.0,
    );

    runner
        .run(&strategy, |(vx, vy, drag, air, mass)| {
            let mut space = Space::with_config(SpaceConfig {
                gravity: 0.0,
                air_resistance: air,
                ..SpaceConfig::default()
            });
            let id = space.add_entity(
                Entity::new(Vec2::ZERO, Hitbox::new(1.0, 1.0), mass)
                    .with_drag(drag)
                    .with_velocity(Vec2::new(vx, vy)),
            );
            space.update();
            let v = space.entity(id).unwrap().vel();
            for (before, after) in [(vx, v.x), (vy, v.y)] {
                prop_assert!(after == 0.0 || after.signum() == before.signum());
                prop_assert!(after.abs() <= before.abs());
            }
            Ok(())
        })
        .unwrap();
}
