//! End-to-end tests of the frame protocol through the public API: create,
//! attach, sync, run systems, destroy.

use std::any::Any;

use ormr::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position(Vec2);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity(Vec2);

#[derive(Debug, Clone)]
struct Sprite {
    asset: &'static str,
}

/// Integrates velocity into position once per frame.
#[derive(Default)]
struct MovementSystem {
    base: SystemBase,
}

impl System for MovementSystem {
    fn require(&self, require: &mut Require<'_>) {
        require.component::<Position>().component::<Velocity>();
    }
    fn base(&self) -> &SystemBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut SystemBase {
        &mut self.base
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl MovementSystem {
    fn update(registry: &mut Registry, delta: f32) {
        let entities = registry.system::<MovementSystem>().base().entities();
        for entity in entities {
            let velocity = *registry.component::<Velocity>(entity);
            let position = registry.component_mut::<Position>(entity);
            position.0 += velocity.0 * delta;
        }
    }
}

/// Emits one draw call per sprite-bearing entity. The "renderer" is an
/// external collaborator — here, a plain buffer of draw descriptions.
#[derive(Default)]
struct RenderSystem {
    base: SystemBase,
}

impl System for RenderSystem {
    fn require(&self, require: &mut Require<'_>) {
        require.component::<Position>().component::<Sprite>();
    }
    fn base(&self) -> &SystemBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut SystemBase {
        &mut self.base
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RenderSystem {
    fn update(registry: &Registry, frame: &mut Vec<String>) {
        let entities = registry.system::<RenderSystem>().base().entities();
        for entity in entities {
            let position = registry.component::<Position>(entity);
            let sprite = registry.component::<Sprite>(entity);
            frame.push(format!("{} @ {},{}", sprite.asset, position.0.x, position.0.y));
        }
    }
}

#[test]
fn movement_scenario() {
    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());

    let e1 = registry.create_entity();
    registry.add_component(e1, Position(Vec2::new(10.0, 30.0)));
    registry.add_component(e1, Velocity(Vec2::new(10.0, 0.0)));

    registry.update();
    assert!(registry.system::<MovementSystem>().base().contains(e1));

    MovementSystem::update(&mut registry, 0.5);
    assert_eq!(registry.component::<Position>(e1).0, Vec2::new(15.0, 30.0));
}

#[test]
fn entity_without_velocity_is_excluded() {
    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());

    let e2 = registry.create_entity();
    registry.add_component(e2, Position(Vec2::ZERO));
    registry.update();

    assert!(!registry.system::<MovementSystem>().base().contains(e2));

    // And movement leaves it untouched.
    MovementSystem::update(&mut registry, 1.0);
    assert_eq!(registry.component::<Position>(e2).0, Vec2::ZERO);
}

#[test]
fn overlapping_signatures_match_independently() {
    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());
    registry.add_system(RenderSystem::default());

    let drawn_mover = registry.create_entity();
    registry.add_component(drawn_mover, Position(Vec2::new(1.0, 2.0)));
    registry.add_component(drawn_mover, Velocity(Vec2::ZERO));
    registry.add_component(drawn_mover, Sprite { asset: "tank" });

    let invisible_mover = registry.create_entity();
    registry.add_component(invisible_mover, Position(Vec2::ZERO));
    registry.add_component(invisible_mover, Velocity(Vec2::ZERO));

    registry.update();

    let movement = registry.system::<MovementSystem>();
    let render = registry.system::<RenderSystem>();
    assert!(movement.base().contains(drawn_mover));
    assert!(movement.base().contains(invisible_mover));
    assert!(render.base().contains(drawn_mover));
    assert!(!render.base().contains(invisible_mover));

    let mut frame = Vec::new();
    RenderSystem::update(&registry, &mut frame);
    assert_eq!(frame, vec!["tank @ 1,2".to_string()]);
}

#[test]
fn creation_is_invisible_until_the_sync_point() {
    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());
    registry.update();

    let e = registry.create_entity();
    registry.add_component(e, Position(Vec2::ZERO));
    registry.add_component(e, Velocity(Vec2::new(5.0, 5.0)));

    // Same frame, before the next sync: the system doesn't see it.
    MovementSystem::update(&mut registry, 1.0);
    assert_eq!(registry.component::<Position>(e).0, Vec2::ZERO);

    registry.update();
    MovementSystem::update(&mut registry, 1.0);
    assert_eq!(registry.component::<Position>(e).0, Vec2::new(5.0, 5.0));
}

#[test]
fn destruction_flushes_everywhere() {
    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());
    registry.add_system(RenderSystem::default());

    let e = registry.create_entity();
    registry.add_component(e, Position(Vec2::ZERO));
    registry.add_component(e, Velocity(Vec2::ZERO));
    registry.add_component(e, Sprite { asset: "chopper" });
    registry.update();

    registry.destroy_entity(e);
    registry.update();

    assert!(registry.system::<MovementSystem>().base().is_empty());
    assert!(registry.system::<RenderSystem>().base().is_empty());
    assert!(!registry.has_component::<Sprite>(e));

    let mut frame = Vec::new();
    RenderSystem::update(&registry, &mut frame);
    assert!(frame.is_empty());
}

#[test]
fn repeated_update_preserves_membership() {
    let mut registry = Registry::new();
    registry.add_system(RenderSystem::default());

    let e = registry.create_entity();
    registry.add_component(e, Position(Vec2::ZERO));
    registry.add_component(e, Sprite { asset: "tree" });
    registry.update();

    let before = registry.system::<RenderSystem>().base().entities();
    registry.update();
    registry.update();
    assert_eq!(registry.system::<RenderSystem>().base().entities(), before);
    assert_eq!(before, vec![e]);
}
