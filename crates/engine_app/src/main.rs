//! # engine_app: host
//!
//! Builds an archetype ECS world, registers the demo systems, and drives the
//! world from a fixed-timestep tick loop.
//!
//! ## Startup Sequence
//!
//! 1. Load [`AppConfig`](config::AppConfig) from the file named by
//!    `ENGINE_CONFIG` (defaults if unset).
//! 2. Register the demo components and populate the world.
//! 3. Register the demo systems.
//! 4. Enter the tick loop.

mod config;
mod demo;
mod tick;

use anyhow::Result;
use engine_ecs::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use tick::TickLoop;

/// Moving entities spawned at startup.
const DEMO_ENTITIES: usize = 256;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    let config = AppConfig::load()?;
    info!(?config, "engine host starting");

    let mut world = World::with_config(config.ecs);
    let components = demo::register_components(&mut world);
    let spawned = demo::populate(&mut world, components, DEMO_ENTITIES)?;
    demo::register_systems(&mut world, components)?;
    info!(
        entities = spawned.len(),
        archetypes = world.archetype_count(),
        components = world.component_count(),
        "world populated"
    );

    let mut tick_loop = TickLoop::new(config.tick, world);
    tick_loop.run()?;

    let world = tick_loop.world();
    info!(
        ticks = tick_loop.tick_id(),
        entities = world.entity_count(),
        removed = world.removed_entities().len(),
        "engine host shut down"
    );
    Ok(())
}
