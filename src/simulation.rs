//! Simulation plugin and systems for Bevy ECS

use crate::config::{load_sim_config, ConfigPath, SimConfig};
use crate::sampler::{RandomSampler, SimRng};
use crate::world::SimWorld;
use bevy::prelude::*;

/// Where [`SimulationPlugin`] takes its configuration from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Read a TOML override file at startup.
    File(String),
    /// Use the given values as-is.
    Inline(SimConfig),
}

/// Installs [`SimConfig`], builds [`SimWorld`] and [`SimRng`] at startup and
/// advances the world once per `Update`.
pub struct SimulationPlugin {
    pub config: ConfigSource,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self {
            config: ConfigSource::File(ConfigPath::default().0),
        }
    }
}

impl SimulationPlugin {
    pub fn with_config(config: SimConfig) -> Self {
        Self {
            config: ConfigSource::Inline(config),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        match &self.config {
            ConfigSource::File(path) => {
                app.insert_resource(SimConfig::default())
                    .insert_resource(ConfigPath(path.clone()))
                    .add_systems(Startup, (load_sim_config, setup_world).chain());
            }
            ConfigSource::Inline(config) => {
                app.insert_resource(config.clone())
                    .add_systems(Startup, setup_world);
            }
        }
        app.add_systems(Update, tick_system.run_if(resource_exists::<SimWorld>));
    }
}

/// Build the world and random source from the active config.  An invalid
/// config is reported and replaced by the compiled defaults.
pub fn setup_world(mut commands: Commands, mut config: ResMut<SimConfig>) {
    let world = match SimWorld::from_config(&config) {
        Ok(world) => world,
        Err(e) => {
            error!("Invalid simulation config: {e}; falling back to defaults");
            *config = SimConfig::default();
            match SimWorld::from_config(&config) {
                Ok(world) => world,
                Err(e) => {
                    error!("Default simulation config rejected: {e}");
                    return;
                }
            }
        }
    };

    info!(
        "Simulation ready: pair policy {:?}, seed {:?}",
        world.pair_policy(),
        config.seed
    );
    commands.insert_resource(world);
    commands.insert_resource(SimRng(RandomSampler::from_seed_option(config.seed)));
}

/// Advance the simulation by one tick.
pub fn tick_system(mut world: ResMut<SimWorld>) {
    let report = world.tick();
    if !report.contacts.is_empty() {
        debug!(
            "Tick {}: {} contacts, {} bodies colliding",
            report.tick,
            report.contacts.len(),
            report.colliding_count()
        );
    }
}
