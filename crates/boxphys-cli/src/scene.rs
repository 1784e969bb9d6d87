// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scene files.

use anyhow::{Context, Result};
use boxphys_core::{Concrete, Entity, Space, SpaceConfig, Vec2};
use serde::Deserialize;
use std::path::Path;

/// A whole world: constants plus the objects to add, in order.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scene {
    #[serde(default)]
    pub config: SpaceConfig,
    #[serde(default)]
    pub entities: Vec<EntityDesc>,
    #[serde(default)]
    pub concretes: Vec<ConcreteDesc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EntityDesc {
    pub pos: Vec2,
    pub size: [f32; 2],
    pub mass: f32,
    #[serde(default)]
    pub vel: Vec2,
    pub friction: Option<f32>,
    pub drag: Option<f32>,
    pub bouncy: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConcreteDesc {
    pub pos: Vec2,
    pub size: [f32; 2],
    #[serde(default)]
    pub vel: Vec2,
    pub friction: Option<f32>,
}

impl Scene {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing scene {}", path.display()))
    }

    /// A floor, two walls, and a small stack of boxes.
    pub(crate) fn demo() -> Self {
        let concretes = vec![
            ConcreteDesc::slab(0.0, 0.0, 200.0, 10.0),
            ConcreteDesc::slab(-10.0, 0.0, 10.0, 120.0),
            ConcreteDesc::slab(200.0, 0.0, 10.0, 120.0),
        ];
        let entities = (0..4u8)
            .map(|i| {
                let f = f32::from(i);
                EntityDesc {
                    pos: Vec2::new(40.0 + 25.0 * f, 30.0 + 15.0 * f),
                    size: [10.0, 10.0],
                    mass: 1.0 + f,
                    vel: Vec2::new(2.0 - f, 0.0),
                    friction: None,
                    drag: None,
                    bouncy: Some(0.25),
                }
            })
            .collect();
        Self {
            config: SpaceConfig::default(),
            entities,
            concretes,
        }
    }

    /// Validates everything and builds the space.
    pub(crate) fn into_space(self) -> Result<Space> {
        self.config.validate().context("invalid space config")?;
        let mut space = Space::with_config(self.config);
        for (i, desc) in self.entities.into_iter().enumerate() {
            let entity = desc.build().with_context(|| format!("entity #{i}"))?;
            space.add_entity(entity);
        }
        for (i, desc) in self.concretes.into_iter().enumerate() {
            let concrete = desc.build().with_context(|| format!("concrete #{i}"))?;
            space.add_concrete(concrete);
        }
        Ok(space)
    }
}

impl EntityDesc {
    fn build(self) -> Result<Entity> {
        let [w, h] = self.size;
        let mut entity = Entity::try_new(self.pos, w, h, self.mass)?.with_velocity(self.vel);
        if let Some(v) = self.friction {
            entity = entity.with_friction(v);
        }
        if let Some(v) = self.drag {
            entity = entity.with_drag(v);
        }
        if let Some(v) = self.bouncy {
            entity = entity.with_bouncy(v);
        }
        entity.validate()?;
        Ok(entity)
    }
}

impl ConcreteDesc {
    fn slab(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: [w, h],
            vel: Vec2::ZERO,
            friction: None,
        }
    }

    fn build(self) -> Result<Concrete> {
        let [w, h] = self.size;
        let mut concrete = Concrete::try_new(self.pos, w, h)?.with_velocity(self.vel);
        if let Some(v) = self.friction {
            concrete = concrete.with_friction(v);
        }
        concrete.validate()?;
        Ok(concrete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_scene_uses_defaults() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "config": { "gravity": 0.5 },
                "entities": [ { "pos": { "x": 0, "y": 20 }, "size": [10, 10], "mass": 2 } ]
            }"#,
        )
        .unwrap();
        assert_eq!(scene.config.gravity, 0.5);
        assert_eq!(scene.config.axis_speed_limit, 100.0);
        let space = scene.into_space().unwrap();
        assert_eq!(space.entities().len(), 1);
        assert_eq!(space.entities()[0].friction(), Entity::DEFAULT_FRICTION);
    }

    #[test]
    fn rejects_bad_objects() {
        let scene: Scene = serde_json::from_str(
            r#"{ "entities": [ { "pos": { "x": 0, "y": 0 }, "size": [10, 10], "mass": 0 } ] }"#,
        )
        .unwrap();
        let err = scene.into_space().unwrap_err();
        assert!(format!("{err:#}").contains("mass"));
    }

    #[test]
    fn demo_scene_builds() {
        let space = Scene::demo().into_space().unwrap();
        assert_eq!(space.entities().len(), 4);
        assert_eq!(space.concretes().len(), 3);
    }
}
