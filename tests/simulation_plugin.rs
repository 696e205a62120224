//! Headless tests for [`SimulationPlugin`].
//!
//! Each app is built on [`MinimalPlugins`] and a fixed seed, so the world is
//! driven frame by frame without a window.
//!
//! Covered scenarios:
//! 1. Startup builds the world and random source; `Update` ticks it.
//! 2. A spawned body moves by its trajectory every frame.
//! 3. Two bodies on a collision course bounce apart.
//! 4. The same seed yields the same generated outlines.
//! 5. Invalid, unreadable or missing configuration falls back to defaults.
//! 6. Handles from another world are reported as unknown.

use asteroid_bounce::config::{PairPolicy, SimConfig};
use asteroid_bounce::error::SimError;
use asteroid_bounce::sampler::SimRng;
use asteroid_bounce::simulation::{ConfigSource, SimulationPlugin};
use asteroid_bounce::world::{BodyHandle, SimWorld};
use bevy::prelude::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded_config(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

/// Build a minimal headless app with the simulation plugin and run the
/// startup frame.
fn app_with(config: SimConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, SimulationPlugin::with_config(config)));
    app.update();
    app
}

/// Spawn a generated body through the app's own random source.
fn spawn(app: &mut App, position: Vec2, trajectory: Vec2, spin: f32) -> BodyHandle {
    app.world_mut()
        .resource_scope(|world, mut rng: Mut<SimRng>| {
            world
                .resource_mut::<SimWorld>()
                .spawn_body(&mut rng.0, position, trajectory, spin)
        })
}

fn sim(app: &App) -> &SimWorld {
    app.world().resource::<SimWorld>()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn startup_builds_world_and_ticks_each_update() {
    let mut app = app_with(seeded_config(1));
    assert!(app.world().contains_resource::<SimRng>());
    assert_eq!(sim(&app).last_report().tick, 1, "first frame ticks once");

    for _ in 0..4 {
        app.update();
    }
    assert_eq!(sim(&app).last_report().tick, 5);
}

#[test]
fn spawned_body_moves_and_spins_every_frame() {
    let mut app = app_with(seeded_config(2));
    let h = spawn(&mut app, Vec2::new(10.0, 20.0), Vec2::new(1.0, -2.0), 5.0);

    for _ in 0..3 {
        app.update();
    }

    let snapshot = sim(&app).snapshot(h).expect("body should exist");
    assert!((snapshot.position - Vec2::new(13.0, 14.0)).length() < 1e-4);
    assert!((snapshot.rotation_degrees - 15.0).abs() < 1e-4);
    assert!(snapshot.global_vertices.is_some());
    assert!(!snapshot.colliding);
}

#[test]
fn bodies_on_collision_course_bounce_apart() {
    let mut app = app_with(seeded_config(3));
    // Every outline contains a disc of radius 18 around its centre, so centres
    // 8 apart after one tick always overlap.
    let a = spawn(&mut app, Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), 0.0);
    let b = spawn(&mut app, Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), 0.0);

    app.update();

    let world = sim(&app);
    let report = world.last_report();
    assert!(report.is_colliding(a) && report.is_colliding(b));
    assert_eq!(world.get(a).unwrap().trajectory, Vec2::new(-1.0, 0.0));
    assert_eq!(world.get(b).unwrap().trajectory, Vec2::new(1.0, 0.0));
    assert!(world.snapshot(a).unwrap().colliding);
}

#[test]
fn both_directions_policy_is_honoured() {
    let mut app = app_with(SimConfig {
        pair_policy: PairPolicy::BothDirections,
        ..seeded_config(4)
    });
    spawn(&mut app, Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), 0.0);
    spawn(&mut app, Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), 0.0);

    app.update();

    assert_eq!(sim(&app).pair_policy(), PairPolicy::BothDirections);
    assert_eq!(sim(&app).last_report().contacts.len(), 2);
}

#[test]
fn same_seed_generates_same_outlines() {
    let mut first = app_with(seeded_config(77));
    let mut second = app_with(seeded_config(77));
    let a = spawn(&mut first, Vec2::ZERO, Vec2::ZERO, 0.0);
    let b = spawn(&mut second, Vec2::ZERO, Vec2::ZERO, 0.0);

    assert_eq!(
        sim(&first).body(a).unwrap().local_vertices(),
        sim(&second).body(b).unwrap().local_vertices()
    );
}

#[test]
fn handle_from_another_world_is_unknown() {
    let mut populated = app_with(seeded_config(8));
    let empty = app_with(seeded_config(8));
    let h = spawn(&mut populated, Vec2::ZERO, Vec2::ZERO, 0.0);

    assert!(sim(&populated).body(h).is_ok());
    assert_eq!(
        sim(&empty).body(h).unwrap_err(),
        SimError::UnknownBody { index: h.index() }
    );
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let app = app_with(SimConfig {
        max_radius: -1.0,
        ..Default::default()
    });
    assert_eq!(*app.world().resource::<SimConfig>(), SimConfig::default());
    assert!(app.world().contains_resource::<SimWorld>());
}

#[test]
fn oversized_canvas_falls_back_to_defaults() {
    let app = app_with(SimConfig {
        max_radius: 1e6,
        ..Default::default()
    });
    assert_eq!(*app.world().resource::<SimConfig>(), SimConfig::default());
    assert!(app.world().contains_resource::<SimWorld>());
}

#[test]
fn unreadable_config_path_uses_defaults() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        SimulationPlugin {
            // A directory, not a file.
            config: ConfigSource::File("src".to_string()),
        },
    ));
    app.update();

    assert_eq!(*app.world().resource::<SimConfig>(), SimConfig::default());
    assert_eq!(sim(&app).last_report().tick, 1);
}

#[test]
fn missing_config_file_uses_defaults() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        SimulationPlugin {
            config: ConfigSource::File("no/such/simulation.toml".to_string()),
        },
    ));
    app.update();

    assert_eq!(*app.world().resource::<SimConfig>(), SimConfig::default());
    assert_eq!(sim(&app).last_report().tick, 1);
}
