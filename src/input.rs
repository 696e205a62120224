//! Mouse input: a left click spawns a new asteroid under the cursor.

use crate::config::SimConfig;
use crate::sampler::SimRng;
use crate::world::{SimWorld, SpawnParams};
use bevy::input::ButtonInput;
use bevy::prelude::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            spawn_on_click_system.run_if(resource_exists::<SimWorld>),
        );
    }
}

/// Spawn a body with random trajectory and spin at the clicked world point.
pub fn spawn_on_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    config: Res<SimConfig>,
    mut world: ResMut<SimWorld>,
    mut rng: ResMut<SimRng>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(position) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let params = SpawnParams::random(&mut rng.0, &config);
    let handle = world.spawn_body(&mut rng.0, position, params.trajectory, params.spin);
    match world.body(handle) {
        Ok(body) => info!(
            "Spawned body {} ({} vertices) at ({:.0}, {:.0}); {} bodies live",
            handle.index(),
            body.local_vertices().len(),
            position.x,
            position.y,
            world.len()
        ),
        Err(e) => warn!("{e}"),
    }
}
