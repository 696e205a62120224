//! Runtime simulation configuration loaded from `assets/simulation.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup the binary reads the TOML file and
//! overwrites the defaults with any values present in it.  Missing keys fall
//! back to the compile-time defaults, so a minimal TOML can override just the
//! constants you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SimConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_non_negative, validate_positive, validate_unit_interval, SimError, SimResult,
};
use crate::outline::OutlineParams;
use bevy::prelude::*;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// How the collision pass enumerates body pairs each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    /// Each unordered pair is tested and bounced at most once per tick.
    #[default]
    UnorderedOnce,
    /// Every body acts as "self" against every other body, so each pair is
    /// tested from both sides and may be bounced twice in one tick.
    BothDirections,
}

/// Runtime-tunable simulation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Outline Geometry ──────────────────────────────────────────────────────
    pub max_radius: f32,
    pub line_thickness: f32,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub angle_jitter: f32,
    pub radius_jitter: f32,
    pub texture_margin: f32,
    pub body_scale: f32,

    // ── Spawning ──────────────────────────────────────────────────────────────
    pub spawn_speed_range: f32,
    pub spawn_spin_range: f32,

    // ── Collision ─────────────────────────────────────────────────────────────
    pub restitution: f32,
    pub pair_policy: PairPolicy,

    // ── Randomness ────────────────────────────────────────────────────────────
    /// Fixed seed for a reproducible run; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_radius: MAX_RADIUS,
            line_thickness: LINE_THICKNESS,
            min_vertices: MIN_VERTICES,
            max_vertices: MAX_VERTICES,
            angle_jitter: ANGLE_JITTER,
            radius_jitter: RADIUS_JITTER,
            texture_margin: TEXTURE_MARGIN,
            body_scale: BODY_SCALE,
            spawn_speed_range: SPAWN_SPEED_RANGE,
            spawn_spin_range: SPAWN_SPIN_RANGE,
            restitution: RESTITUTION,
            pair_policy: PairPolicy::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Decode a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> SimResult<Self> {
        toml::from_str::<SimConfig>(contents).map_err(|e| SimError::ConfigParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read `path` and decode it.  Returns `Ok(None)` when the file does not
    /// exist; any other IO failure is an error.
    pub fn read(path: impl AsRef<Path>) -> SimResult<Option<Self>> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents)
                .map(Some)
                .map_err(|e| match e {
                    SimError::ConfigParse { message, .. } => SimError::ConfigParse {
                        path: path.display().to_string(),
                        message,
                    },
                    other => other,
                }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SimError::ConfigRead {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Like [`Self::read`], but a missing file yields the compiled defaults.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        Ok(Self::read(path)?.unwrap_or_default())
    }

    /// Check every value against its safe operating range.
    pub fn validate(&self) -> SimResult<()> {
        if self.min_vertices < MIN_POLYGON_VERTICES {
            return Err(SimError::InsufficientVertices {
                got: self.min_vertices,
                required: MIN_POLYGON_VERTICES,
            });
        }
        if self.min_vertices > self.max_vertices {
            return Err(SimError::InvalidRange {
                name: "vertex_count",
                min: self.min_vertices as f32,
                max: self.max_vertices as f32,
            });
        }
        validate_positive("max_radius", self.max_radius)?;
        validate_non_negative("line_thickness", self.line_thickness)?;
        validate_non_negative("angle_jitter", self.angle_jitter)?;
        validate_unit_interval("radius_jitter", self.radius_jitter)?;
        validate_positive("body_scale", self.body_scale)?;
        validate_non_negative("spawn_speed_range", self.spawn_speed_range)?;
        validate_non_negative("spawn_spin_range", self.spawn_spin_range)?;
        validate_unit_interval("restitution", self.restitution)?;
        if !self.texture_margin.is_finite() || self.texture_margin < 1.0 + self.radius_jitter {
            return Err(SimError::UnsafeConstant {
                name: "texture_margin",
                value: self.texture_margin,
                safe_range: "[1.0 + radius_jitter, ∞)",
            });
        }
        let canvas = (self.max_radius * self.texture_margin + self.line_thickness) * 2.0;
        if !canvas.is_finite() || canvas > MAX_TEXTURE_WIDTH as f32 {
            return Err(SimError::UnsafeConstant {
                name: "texture_width",
                value: canvas,
                safe_range: "(0.0, MAX_TEXTURE_WIDTH]",
            });
        }
        Ok(())
    }

    /// Outline generation parameters derived from this configuration.
    pub fn outline_params(&self) -> OutlineParams {
        OutlineParams {
            max_radius: self.max_radius,
            line_thickness: self.line_thickness,
            vertex_count: self.min_vertices..=self.max_vertices,
            angle_jitter: self.angle_jitter,
            radius_jitter: self.radius_jitter,
            texture_margin: self.texture_margin,
        }
    }
}

/// Startup system: attempt to load the configured TOML file and overwrite the
/// `SimConfig` resource with any values present in the file.
///
/// Parse errors are logged but do not abort the simulation.
pub fn load_sim_config(mut config: ResMut<SimConfig>, path: Res<ConfigPath>) {
    match SimConfig::read(&path.0) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded simulation config from {}", path.0);
        }
        Ok(None) => {
            *config = SimConfig::default();
            info!("No {} found; using compiled defaults", path.0);
        }
        Err(e) => {
            warn!("{e}; using defaults");
        }
    }
}

/// Path of the TOML override file read by [`load_sim_config`].
#[derive(Resource, Debug, Clone)]
pub struct ConfigPath(pub String);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(DEFAULT_CONFIG_PATH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = SimConfig::default();
        assert_eq!(c.max_radius, 50.0);
        assert_eq!(c.line_thickness, 2.0);
        assert_eq!((c.min_vertices, c.max_vertices), (5, 8));
        assert_eq!(c.restitution, 1.0);
        assert_eq!(c.pair_policy, PairPolicy::UnorderedOnce);
        assert!(c.seed.is_none());
    }

    #[test]
    fn defaults_validate() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let c = SimConfig::from_toml_str("max_radius = 20.0\nseed = 7\n").unwrap();
        assert_eq!(c.max_radius, 20.0);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.line_thickness, LINE_THICKNESS);
    }

    #[test]
    fn pair_policy_parses_snake_case() {
        let c = SimConfig::from_toml_str("pair_policy = \"both_directions\"").unwrap();
        assert_eq!(c.pair_policy, PairPolicy::BothDirections);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SimConfig::from_toml_str("max_radius = \"big\"").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let c = SimConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(c, SimConfig::default());
    }

    #[test]
    fn too_few_vertices_rejected() {
        let c = SimConfig {
            min_vertices: 2,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(SimError::InsufficientVertices {
                got: 2,
                required: 3
            })
        );
    }

    #[test]
    fn inverted_vertex_range_rejected() {
        let c = SimConfig {
            min_vertices: 9,
            max_vertices: 6,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(SimError::InvalidRange { .. })));
    }

    #[test]
    fn narrow_margin_rejected() {
        let c = SimConfig {
            texture_margin: 1.1,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_finite_margin_rejected() {
        for text in ["texture_margin = inf", "texture_margin = nan"] {
            let c = SimConfig::from_toml_str(text).unwrap();
            assert!(
                matches!(
                    c.validate(),
                    Err(SimError::UnsafeConstant {
                        name: "texture_margin",
                        ..
                    })
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn oversized_canvas_rejected() {
        let c = SimConfig {
            max_radius: 1e6,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(SimError::UnsafeConstant {
                name: "texture_width",
                ..
            })
        ));
    }

    #[test]
    fn large_canvas_under_limit_is_accepted() {
        // (1000·1.3 + 2)·2 = 2604
        let c = SimConfig {
            max_radius: 1000.0,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn missing_file_reads_as_none() {
        assert_eq!(SimConfig::read("does/not/exist.toml").unwrap(), None);
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        // A directory exists but cannot be read as a file.
        let err = SimConfig::load("src").unwrap_err();
        assert!(matches!(err, SimError::ConfigRead { .. }), "got {err:?}");
    }

    #[test]
    fn outline_params_carry_vertex_range() {
        let p = SimConfig::default().outline_params();
        assert_eq!(p.vertex_count, 5..=8);
        assert_eq!(p.max_radius, 50.0);
    }
}
