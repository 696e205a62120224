//! Centralised simulation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::SimConfig::default`] reads every
//! value from this module, so a TOML override file only needs to list the
//! keys that differ.

use std::f32::consts::PI;

// ── Outline Geometry ──────────────────────────────────────────────────────────

/// Nominal outline radius of a freshly spawned asteroid (world units).
///
/// Individual vertices land within `±RADIUS_JITTER` of this value.
pub const MAX_RADIUS: f32 = 50.0;

/// Stroke half-width of the rasterised outline (pixels).
pub const LINE_THICKNESS: f32 = 2.0;

/// Smallest vertex count drawn for a generated outline (inclusive).
pub const MIN_VERTICES: usize = 5;

/// Largest vertex count drawn for a generated outline (inclusive).
pub const MAX_VERTICES: usize = 8;

/// Maximum angular offset (radians) applied to each evenly spaced vertex.
///
/// At π/8 neighbouring vertices of an octagon can just touch but never swap
/// order, so the outline stays a simple polygon.
pub const ANGLE_JITTER: f32 = PI / 8.0;

/// Per-vertex radius jitter as a fraction of [`MAX_RADIUS`].
///
/// 0.3 gives radii in `[0.7·r, 1.3·r]`.
pub const RADIUS_JITTER: f32 = 0.3;

/// Texture half-extent multiplier applied to the radius.
///
/// Must be at least `1.0 + RADIUS_JITTER` or the outermost vertices are
/// clipped at the canvas edge.
pub const TEXTURE_MARGIN: f32 = 1.3;

/// Largest outline canvas side (pixels) a configuration may produce.
///
/// The mask holds `width²` pixels, so this also caps per-body memory.
pub const MAX_TEXTURE_WIDTH: u32 = 4096;

/// Uniform geometry/texture scale of new bodies.
pub const BODY_SCALE: f32 = 1.0;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Each trajectory component of a spawned body is drawn from `[-r, r]`
/// (world units per tick).
pub const SPAWN_SPEED_RANGE: f32 = 3.0;

/// Spin of a spawned body is drawn from `[-r, r]` (degrees per tick).
pub const SPAWN_SPIN_RANGE: f32 = 7.0;

// ── Collision ─────────────────────────────────────────────────────────────────

/// Restitution coefficient used by the bounce resolver.
/// 0.0 = perfectly inelastic; 1.0 = perfectly elastic.
pub const RESTITUTION: f32 = 1.0;

/// Location of the optional override file read by the binary at startup.
pub const DEFAULT_CONFIG_PATH: &str = "assets/simulation.toml";

/// Minimum number of vertices any polygon must have to be collidable.
pub const MIN_POLYGON_VERTICES: usize = 3;
