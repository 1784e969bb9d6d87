// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! End-to-end behavior of `Space::update`.

use std::cell::Cell;
use std::rc::Rc;

use boxphys_core::{
    add_object, create_space, would_collide_with_any, Axis, Concrete, Contact, Entity, Hitbox,
    ObjectKind, ObjectRef, Space, SpaceConfig, Tick, Vec2,
};

fn floor() -> Concrete {
    Concrete::new(Vec2::new(0.0, 0.0), Hitbox::new(100.0, 10.0))
}

fn cube(x: f32, y: f32) -> Entity {
    Entity::new(Vec2::new(x, y), Hitbox::new(10.0, 10.0), 1.0)
}

fn weightless() -> Space {
    Space::with_config(SpaceConfig {
        gravity: 0.0,
        ..SpaceConfig::default()
    })
}

#[test]
fn first_tick_applies_gravity_without_contact() {
    let mut space = create_space();
    space.add(floor());
    let id = space.add_entity(cube(0.0, 20.0));

    let report = space.update();
    assert_eq!(report.tick, Tick::new(0));
    assert!(report.events.is_empty());

    let e = space.entity(id).unwrap();
    assert_eq!(e.vel().y, -0.3);
    assert!((e.pos().y - 19.7).abs() < 1e-5);
    assert!(!e.grounded());
    assert!(!e.pre_collided());
}

#[test]
fn entity_touching_floor_lands_on_first_tick() {
    let mut space = create_space();
    let floor_id = space.add_concrete(floor());
    let id = space.add_entity(cube(0.0, 10.0));

    // Touching faces do not count as overlap, so no pre-collision.
    assert!(!space.would_collide(Vec2::new(0.0, 10.0), Hitbox::new(10.0, 10.0)));

    let report = space.update();
    let e = space.entity(id).unwrap();
    assert!(!e.pre_collided());
    // Gravity moved it into the floor; the Y pass put it back on top.
    assert!(e.grounded());
    assert_eq!(e.vel().y, 0.0);
    assert!(e.pos().y > 10.0 && e.pos().y < 10.02);

    let events: Vec<_> = report.collisions().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].axis(), Axis::Y);
    assert_eq!(events[0].concrete(), floor_id);
    assert_eq!(events[0].entity(), id);
}

#[test]
fn resting_contact_is_stable() {
    let mut space = create_space();
    space.add(floor());
    let id = space.add_entity(cube(20.0, 60.0));

    for _ in 0..200 {
        space.update();
    }
    for _ in 0..50 {
        space.update();
        let e = space.entity(id).unwrap();
        assert!(e.grounded());
        assert_eq!(e.vel().y, 0.0);
        assert!(e.pos().y > 10.0 && e.pos().y < 10.02, "y = {}", e.pos().y);
        assert_eq!(e.pos().x, 20.0);
    }
}

#[test]
fn precollided_entity_is_not_resolved() {
    let mut space = create_space();
    space.add(floor());
    let id = space.add_entity(cube(0.0, 5.0).with_velocity(Vec2::new(0.0, -5.0)));

    let report = space.update();
    let e = space.entity(id).unwrap();
    assert!(e.pre_collided());
    assert!(report.events.is_empty());
    assert!(!e.grounded());
    // Nudged down one unit, then moved by its own velocity unopposed.
    let expected = 5.0 - 1.0 + e.vel().y;
    assert!((e.pos().y - expected).abs() < 1e-5);
}

#[test]
fn wall_contact_sets_horizontal_flag_and_stops() {
    let mut space = weightless();
    let wall = space.add_concrete(Concrete::new(Vec2::new(12.0, -50.0), Hitbox::new(10.0, 100.0)));
    let id = space.add_entity(cube(0.0, 0.0).with_velocity(Vec2::new(5.0, 0.0)));

    let report = space.update();
    let e = space.entity(id).unwrap();
    // Moving right into a concrete sets `left` (historical convention).
    assert!(e.hits().left);
    assert!(!e.hits().right);
    assert_eq!(e.vel().x, 0.0);
    assert!(e.pos().x + 10.0 <= 12.0);

    let event = report.collisions().next().unwrap();
    assert_eq!(event.axis(), Axis::X);
    assert_eq!(
        event.contact(),
        Contact::EntityConcrete {
            entity: id,
            concrete: wall
        }
    );
}

#[test]
fn overlapping_entities_separate_symmetrically() {
    let run = |gap: f32| {
        let mut space = weightless();
        let a = space.add_entity(cube(0.0, 0.0));
        let b = space.add_entity(cube(gap, 0.0));
        let first = space.update();
        assert_eq!(first.collisions().count(), 1);
        space.update();
        let da = space.entity(a).unwrap().pos().x;
        let db = space.entity(b).unwrap().pos().x - gap;
        (da, db)
    };

    let (da, db) = run(8.0);
    assert!(da < 0.0 && db > 0.0);
    assert!((da + db).abs() < 1e-4, "equal mass moves equally: {da} vs {db}");

    // Displacement scales with the initial overlap: 4.01 vs 2.01 units deep.
    let (deep_a, _) = run(6.0);
    let ratio = deep_a / da;
    let expected = 4.01 / 2.01;
    assert!((ratio - expected).abs() < 1e-3, "ratio {ratio}, expected {expected}");
}

#[test]
fn vertical_entity_overlap_pushes_lower_one_down() {
    let mut space = weightless();
    let low = space.add_entity(cube(0.0, 0.0));
    let high = space.add_entity(cube(1.0, 9.0));
    let report = space.update();
    let event = report.collisions().next().unwrap();
    assert_eq!(event.axis(), Axis::Y);
    assert!(space.entity(low).unwrap().pending_force().y < 0.0);
    assert!(space.entity(high).unwrap().pending_force().y > 0.0);
}

#[test]
fn kinematic_platform_carries_entity() {
    let mut space = create_space();
    let platform = space.add_concrete(floor().with_velocity(Vec2::new(0.0, 1.0)));
    let id = space.add_entity(cube(0.0, 10.5));

    for n in 1..=20u8 {
        space.update();
        let top = space.concrete(platform).unwrap().pos().y + 10.0;
        assert_eq!(space.concrete(platform).unwrap().pos().y, f32::from(n));
        let e = space.entity(id).unwrap();
        assert!(e.grounded());
        assert_eq!(e.vel().y, 1.0);
        assert!(e.pos().y >= top);
    }
}

#[test]
fn platform_animated_after_insertion_drags_rider_along() {
    let mut space = create_space();
    let platform = space.add_concrete(floor());
    let id = space.add_entity(cube(40.0, 10.0));
    space.update();
    assert!(space.entity(id).unwrap().grounded());

    space
        .concrete_mut(platform)
        .unwrap()
        .set_velocity(Vec2::new(2.0, 0.0));
    for n in 1..=10u8 {
        space.update();
        assert_eq!(space.concrete(platform).unwrap().pos().x, 2.0 * f32::from(n));
        assert!(space.entity(id).unwrap().grounded());
    }
    let rider = space.entity(id).unwrap();
    assert!(rider.vel().x > 0.0);
    assert!(rider.pos().x > 40.0);
}

#[test]
fn ties_resolve_against_first_inserted_concrete() {
    let mut space = create_space();
    let first = space.add_concrete(floor());
    space.add_concrete(floor());
    space.add_entity(cube(0.0, 10.0));
    let report = space.update();
    let event = report.collisions().next().unwrap();
    assert_eq!(event.concrete(), first);
}

#[test]
fn scripts_run_once_per_tick_per_object() {
    let entity_calls = Rc::new(Cell::new(0u32));
    let concrete_calls = Rc::new(Cell::new(0u32));

    let mut space = create_space();
    let counter = Rc::clone(&concrete_calls);
    space.add(floor().with_script(move |_c: &mut Concrete| counter.set(counter.get() + 1)));
    let counter = Rc::clone(&entity_calls);
    let id = space.add_entity(cube(0.0, 50.0).with_script(move |e: &mut Entity| {
        counter.set(counter.get() + 1);
        // Cancel gravity for the next tick.
        e.apply_force(0.0, 0.3);
    }));

    space.update();
    space.update();
    space.update();
    assert_eq!(entity_calls.get(), 3);
    assert_eq!(concrete_calls.get(), 3);
    // The script's force cancels the previous tick's gravity before drag,
    // so velocity never builds past one tick's worth.
    assert_eq!(space.entity(id).unwrap().vel().y, -0.3);
}

#[test]
fn script_removing_itself_stays_removed() {
    let calls = Rc::new(Cell::new(0u32));
    let mut space = create_space();
    let counter = Rc::clone(&calls);
    let id = space.add_entity(cube(0.0, 50.0).with_script(move |e: &mut Entity| {
        counter.set(counter.get() + 1);
        e.set_script(None);
    }));

    space.update();
    space.update();
    space.update();
    assert_eq!(calls.get(), 1);
    assert!(!space.entity(id).unwrap().has_script());
}

#[test]
fn spaces_get_distinct_ids() {
    let a = create_space();
    let b = create_space();
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id().value(), b.id().value());
}

#[test]
fn add_object_attaches_back_reference() {
    let mut space = create_space();
    let id = add_object(&mut space, cube(0.0, 0.0));
    let floor_id = add_object(&mut space, floor());
    assert_eq!(id.kind(), ObjectKind::Entity);
    assert_eq!(floor_id.kind(), ObjectKind::Concrete);
    assert_eq!(floor_id.as_concrete().map(|c| c.index()), Some(0));
    assert_eq!(id.as_concrete(), None);

    let owners: Vec<_> = space.objects().map(|o| o.body().space()).collect();
    assert_eq!(owners, vec![Some(space.id()), Some(space.id())]);
    assert!(matches!(space.objects().next(), Some(ObjectRef::Entity(..))));
}

#[test]
fn probe_query_ignores_entities() {
    let mut space = create_space();
    space.add(floor());
    space.add(cube(50.0, 50.0));
    let hb = Hitbox::new(10.0, 10.0);
    assert!(would_collide_with_any(&space, Vec2::new(5.0, 5.0), hb));
    assert!(!would_collide_with_any(&space, Vec2::new(50.0, 50.0), hb));
    assert_eq!(space.entities().len(), 1);
}

#[test]
fn identical_worlds_stay_bit_identical() {
    fn build() -> Space {
        let mut space = create_space();
        space.add(floor());
        space.add(Concrete::new(Vec2::new(-10.0, 0.0), Hitbox::new(10.0, 80.0)));
        space.add(Concrete::new(Vec2::new(100.0, 0.0), Hitbox::new(10.0, 80.0)));
        for i in 0..6u8 {
            let f = f32::from(i);
            space.add(
                cube(5.0 + 12.0 * f, 20.0 + 7.0 * f)
                    .with_velocity(Vec2::new(3.0 - f, 0.0))
                    .with_bouncy(0.1 * f),
            );
        }
        space
    }

    fn state(space: &Space) -> Vec<[u32; 4]> {
        space
            .entities()
            .iter()
            .map(|e| {
                [
                    e.pos().x.to_bits(),
                    e.pos().y.to_bits(),
                    e.vel().x.to_bits(),
                    e.vel().y.to_bits(),
                ]
            })
            .collect()
    }

    let mut a = build();
    let mut b = build();
    for _ in 0..300 {
        let ra = a.update();
        let rb = b.update();
        assert_eq!(ra.events.len(), rb.events.len());
    }
    assert_eq!(state(&a), state(&b));
    assert_eq!(a.tick(), Tick::new(300));
}

#[test]
fn space_keeps_only_the_latest_tick_events() {
    let mut space = Space::new();
    space.add_entity(Entity::new(Vec2::new(0.0, 10.0), Hitbox::new(10.0, 10.0), 1.0));
    space.add_concrete(Concrete::new(Vec2::ZERO, Hitbox::new(100.0, 10.0)));
    assert!(space.events().is_empty());

    let report = space.update();
    assert!(!report.events.is_empty());
    assert_eq!(space.events(), report.events.as_slice());

    let next = space.update();
    assert_eq!(space.events(), next.events.as_slice());
    assert_eq!(next.tick, Tick::new(1));
}
