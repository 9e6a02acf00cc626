//! Demo world: particles that move, lose health over time, and are reaped
//! when they reach zero.

use anyhow::Result;
use engine_component::{Component, ComponentHandle, EntityHandle};
use engine_ecs::{ArchetypeQuery, ComponentQuery, World};
use tracing::{info, warn};

/// A 2D position in world units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// Linear velocity in world units per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

/// Current and maximum hit points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// A health component at full HP.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` if the entity is alive (HP > 0).
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }
}

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

/// Component handles of the demo schema.
#[derive(Debug, Clone, Copy)]
pub struct DemoComponents {
    pub position: ComponentHandle,
    pub velocity: ComponentHandle,
    pub health: ComponentHandle,
}

/// Ticks between two rounds of damage.
pub const DECAY_RATE: u32 = 10;
/// HP lost per round of damage.
pub const DECAY_AMOUNT: f32 = 1.0;
/// Ticks between two reaper passes.
pub const REAP_RATE: u32 = 30;
/// Ticks between two population reports.
pub const REPORT_RATE: u32 = 60;

/// Register the demo components.
pub fn register_components(world: &mut World) -> DemoComponents {
    DemoComponents {
        position: world.register_component::<Position>(),
        velocity: world.register_component::<Velocity>(),
        health: world.register_component::<Health>(),
    }
}

/// Spawn `count` moving entities with staggered health, plus a handful of
/// static markers that never move.
///
/// # Errors
///
/// Fails if a component handle is not registered in `world`.
pub fn populate(
    world: &mut World,
    components: DemoComponents,
    count: usize,
) -> Result<Vec<EntityHandle>> {
    let DemoComponents {
        position,
        velocity,
        health,
    } = components;

    let mut spawned = Vec::with_capacity(count);
    for i in 0..count {
        let entity = world.create_entity(&[position, velocity, health])?;
        let step = i as f32;
        world.set_component(entity, velocity, Velocity { dx: 1.0, dy: step * 0.5 })?;
        world.set_component(entity, health, Health::full(1.0 + (i % 5) as f32))?;
        spawned.push(entity);
    }
    for i in 0..count.div_ceil(4) {
        let marker = world.create_entity(&[position])?;
        world.set_component(marker, position, Position { x: i as f32 * 10.0, y: 0.0 })?;
    }
    Ok(spawned)
}

/// Register the demo systems: movement every tick, decay, reaper, report.
///
/// # Errors
///
/// Fails if a system is given a zero rate.
pub fn register_systems(world: &mut World, components: DemoComponents) -> Result<()> {
    let DemoComponents {
        position,
        velocity,
        health,
    } = components;

    world.register_system(
        "movement",
        1,
        ComponentQuery::new(&[position, velocity]),
        move |world, matched| {
            for &entity in matched {
                let Some(&v) = world.get_component::<Velocity>(entity, velocity) else {
                    continue;
                };
                if let Some(p) = world.get_component_mut::<Position>(entity, position) {
                    p.x += v.dx;
                    p.y += v.dy;
                }
            }
        },
    )?;

    world.register_system(
        "decay",
        DECAY_RATE,
        ComponentQuery::new(&[health]),
        move |world, matched| {
            for &entity in matched {
                if let Some(h) = world.get_component_mut::<Health>(entity, health) {
                    h.damage(DECAY_AMOUNT);
                }
            }
        },
    )?;

    world.register_system(
        "reaper",
        REAP_RATE,
        ComponentQuery::new(&[health]),
        move |world, matched| {
            for &entity in matched {
                let alive = world
                    .get_component::<Health>(entity, health)
                    .is_some_and(Health::is_alive);
                if alive {
                    continue;
                }
                if let Err(err) = world.remove_entity(entity) {
                    warn!(%entity, %err, "failed to reap entity");
                }
            }
        },
    )?;

    world.register_system(
        "report",
        REPORT_RATE,
        ArchetypeQuery::new(&[position]),
        |world, markers| {
            info!(
                tick = world.tick(),
                entities = world.entity_count(),
                removed = world.removed_entities().len(),
                markers = markers.len(),
                archetypes = world.archetype_count(),
                "population"
            );
        },
    )?;

    Ok(())
}
