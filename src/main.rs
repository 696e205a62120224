use asteroid_bounce::input::InputPlugin;
use asteroid_bounce::rendering::RenderingPlugin;
use asteroid_bounce::simulation::{ConfigSource, SimulationPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::env;

/// Setup camera for 2D rendering
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    // Optional override of the config file location
    let plugin = match env::var("ASTEROID_BOUNCE_CONFIG") {
        Ok(path) => SimulationPlugin {
            config: ConfigSource::File(path),
        },
        Err(_) => SimulationPlugin::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asteroid Bounce".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins((plugin, InputPlugin, RenderingPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}
