//! Asteroid bounce simulation library
//!
//! Procedurally generated polygon asteroids drift, spin, and bounce off one
//! another elastically.  The pure core (`outline`, `geometry`, `body`,
//! `collision`, `world`) has no ECS dependency beyond Bevy's math types; the
//! `simulation`, `input`, and `rendering` modules wire it into a Bevy app.

pub mod body;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod outline;
pub mod rendering;
pub mod sampler;
pub mod simulation;
pub mod world;
