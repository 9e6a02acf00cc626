//! Fixed-timestep tick loop.
//!
//! Each tick calls [`World::step`] once, which counts every registered system
//! and fires those whose rate is reached. The loop sleeps for the rest of the
//! tick budget and warns when a tick overruns it.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use engine_ecs::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Configuration for the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 0,
        }
    }
}

impl TickConfig {
    /// Wall-clock budget of one tick, or `None` if the rate is not a positive
    /// finite number.
    #[must_use]
    pub fn tick_duration(&self) -> Option<Duration> {
        if self.tick_rate.is_finite() && self.tick_rate > 0.0 {
            Duration::try_from_secs_f64(1.0 / self.tick_rate).ok()
        } else {
            None
        }
    }
}

/// The tick loop and the world it drives.
#[derive(Debug)]
pub struct TickLoop {
    config: TickConfig,
    world: World,
}

impl TickLoop {
    /// Create a tick loop driving `world`.
    #[must_use]
    pub fn new(config: TickConfig, world: World) -> Self {
        Self { config, world }
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.world.tick()
    }

    /// Returns a reference to the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run one tick of the simulation.
    ///
    /// Returns the number of systems that fired.
    pub fn tick(&mut self) -> usize {
        let fired = self.world.step();
        debug!(
            tick_id = self.world.tick(),
            fired,
            entities = self.world.entity_count(),
            "tick complete"
        );
        fired
    }

    /// Run the tick loop for the configured number of ticks, or indefinitely.
    ///
    /// # Errors
    ///
    /// Fails if the configured tick rate is not a positive finite number.
    pub fn run(&mut self) -> Result<()> {
        let Some(tick_duration) = self.config.tick_duration() else {
            bail!("invalid tick rate {}", self.config.tick_rate);
        };
        let mut tick_count = 0u64;

        info!(
            tick_rate = self.config.tick_rate,
            max_ticks = self.config.max_ticks,
            systems = self.world.system_count(),
            "starting tick loop"
        );

        loop {
            let start = Instant::now();

            self.tick();

            tick_count += 1;
            if self.config.max_ticks > 0 && tick_count >= self.config.max_ticks {
                info!(ticks = tick_count, "tick loop complete");
                return Ok(());
            }

            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else {
                warn!(
                    tick_id = self.world.tick(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }
    }
}
