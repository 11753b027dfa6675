//! Headless game loop: two moving entities, one drawn, frame-capped at 30fps.
//!
//! Run with `RUST_LOG=debug cargo run --example movement` to watch the
//! Registry's lifecycle logging.

use std::any::Any;

use ormr::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Position(Vec2);

#[derive(Debug, Clone, Copy)]
struct Velocity(Vec2);

#[derive(Debug, Clone)]
struct Sprite {
    asset: &'static str,
}

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
    /// Stand-in for a real renderer: one line per drawn sprite.
    fn update(registry: &Registry, frame: u64) {
        let entities = registry.system::<RenderSystem>().base().entities();
        for entity in entities {
            let position = registry.component::<Position>(entity);
            let sprite = registry.component::<Sprite>(entity);
            println!(
                "frame {frame}: {} at ({:.1}, {:.1})",
                sprite.asset, position.0.x, position.0.y
            );
        }
    }
}

fn main() {
    env_logger::init();

    let mut registry = Registry::new();
    registry.add_system(MovementSystem::default());
    registry.add_system(RenderSystem::default());

    let tank = registry.create_entity();
    registry.add_component(tank, Position(Vec2::new(10.0, 30.0)));
    registry.add_component(tank, Velocity(Vec2::new(40.0, 0.0)));
    registry.add_component(tank, Sprite { asset: "tank" });

    // Moves but is never drawn: no Sprite.
    let ghost = registry.create_entity();
    registry.add_component(ghost, Position(Vec2::ZERO));
    registry.add_component(ghost, Velocity(Vec2::new(0.0, 15.0)));

    let mut time = Time::with_target_fps(30);
    for _ in 0..60 {
        time.tick();

        // Sync point first, then systems in caller-chosen order.
        registry.update();
        MovementSystem::update(&mut registry, time.delta_secs());
        RenderSystem::update(&registry, time.frame_count());

        // Halfway through, retire the tank; it disappears next frame.
        if time.frame_count() == 30 {
            registry.destroy_entity(tank);
        }
    }

    println!(
        "ran {} frames in {:.2}s ({} entities created)",
        time.frame_count(),
        time.elapsed_secs(),
        registry.entity_count()
    );
}
