//! The set of live bodies and the per-tick simulation step.
//!
//! Bodies live in a dense arena and are addressed by [`BodyHandle`].  Handles
//! stay valid for the life of the world because bodies are never removed.
//!
//! One [`SimWorld::tick`] runs, in order:
//! 1. integrate every body (spin, then trajectory),
//! 2. recompute every body's world-space vertices,
//! 3. the pairwise collision pass, bouncing every overlapping pair.
//!
//! Collision status is not stored on the bodies; it is returned in the
//! [`TickReport`] and kept until the next tick for snapshots.

use crate::body::{Body, BodySnapshot};
use crate::collision::{bounce, is_colliding};
use crate::config::{PairPolicy, SimConfig};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::error::{SimError, SimResult};
use crate::outline::{generate_outline, OutlineParams};
use crate::sampler::UniformSampler;
use bevy::prelude::*;

/// Stable index of a body inside a [`SimWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Initial motion of a spawned body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub trajectory: Vec2,
    pub spin: f32,
}

impl SpawnParams {
    /// Draw each trajectory component from `±spawn_speed_range` and the spin
    /// from `±spawn_spin_range`.
    pub fn random(sampler: &mut impl UniformSampler, config: &SimConfig) -> Self {
        let speed = config.spawn_speed_range;
        let spin = config.spawn_spin_range;
        Self {
            trajectory: Vec2::new(sampler.uniform(-speed, speed), sampler.uniform(-speed, speed)),
            spin: sampler.uniform(-spin, spin),
        }
    }
}

/// A detected overlap between two bodies during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: BodyHandle,
    pub b: BodyHandle,
    /// `false` when the pair was already separating and the resolver did
    /// nothing.
    pub impulse_applied: bool,
}

/// Outcome of one [`SimWorld::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// 1-based tick number; 0 before the first tick.
    pub tick: u64,
    pub contacts: Vec<Contact>,
    colliding: Vec<bool>,
}

impl TickReport {
    /// Whether `handle` overlapped any other body this tick.  Bodies spawned
    /// after the tick report `false`.
    pub fn is_colliding(&self, handle: BodyHandle) -> bool {
        self.colliding.get(handle.0).copied().unwrap_or(false)
    }

    pub fn colliding_count(&self) -> usize {
        self.colliding.iter().filter(|&&c| c).count()
    }
}

/// Owner of every live body.
#[derive(Resource, Debug, Clone)]
pub struct SimWorld {
    bodies: Vec<Body>,
    outline_params: OutlineParams,
    body_scale: f32,
    restitution: f32,
    pair_policy: PairPolicy,
    last_report: TickReport,
}

impl SimWorld {
    /// Build an empty world after validating `config`.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            outline_params: config.outline_params(),
            body_scale: config.body_scale,
            restitution: config.restitution,
            pair_policy: config.pair_policy,
            last_report: TickReport::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn pair_policy(&self) -> PairPolicy {
        self.pair_policy
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    /// Like [`Self::get`], but a foreign handle is reported as an error.
    pub fn body(&self, handle: BodyHandle) -> SimResult<&Body> {
        self.get(handle).ok_or(SimError::UnknownBody {
            index: handle.index(),
        })
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    /// Handles of every body in spawn order.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> {
        (0..self.bodies.len()).map(BodyHandle)
    }

    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }

    /// Generate a fresh outline and register a body with it.
    pub fn spawn_body(
        &mut self,
        sampler: &mut impl UniformSampler,
        position: Vec2,
        trajectory: Vec2,
        spin: f32,
    ) -> BodyHandle {
        let outline = generate_outline(sampler, &self.outline_params);
        debug!(
            "Spawning body {} at {:?}: {} vertices, {}px texture",
            self.bodies.len(),
            position,
            outline.local_vertices.len(),
            outline.texture_width
        );
        let body = Body::new(outline, position, trajectory, spin).with_scale(self.body_scale);
        self.push(body)
    }

    /// Register a caller-built body.
    pub fn insert_body(&mut self, body: Body) -> SimResult<BodyHandle> {
        let got = body.local_vertices().len();
        if got < MIN_POLYGON_VERTICES {
            return Err(SimError::InsufficientVertices {
                got,
                required: MIN_POLYGON_VERTICES,
            });
        }
        Ok(self.push(body))
    }

    fn push(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Presentation view of one body, including the last collision flag.
    pub fn snapshot(&self, handle: BodyHandle) -> Option<BodySnapshot<'_>> {
        let body = self.bodies.get(handle.0)?;
        Some(BodySnapshot {
            position: body.position,
            rotation_degrees: body.rotation_degrees,
            scale: body.scale,
            texture_center: body.texture_center(),
            mask: &body.outline().mask,
            global_vertices: body.global_vertices(),
            colliding: self.last_report.is_colliding(handle),
        })
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> &TickReport {
        for body in &mut self.bodies {
            body.integrate();
        }
        for body in &mut self.bodies {
            body.recompute_global_vertices();
        }

        let n = self.bodies.len();
        let mut report = TickReport {
            tick: self.last_report.tick + 1,
            contacts: Vec::new(),
            colliding: vec![false; n],
        };

        match self.pair_policy {
            PairPolicy::UnorderedOnce => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        self.resolve_pair(i, j, &mut report);
                    }
                }
            }
            PairPolicy::BothDirections => {
                for this in 0..n {
                    for other in (0..n).filter(|&other| other != this) {
                        self.resolve_pair(other, this, &mut report);
                    }
                }
            }
        }

        self.last_report = report;
        &self.last_report
    }

    /// Test `a` against `b` and bounce them if they overlap.  Bodies without
    /// world vertices are not collidable yet.
    fn resolve_pair(&mut self, a: usize, b: usize, report: &mut TickReport) {
        let hit = match (
            self.bodies[a].global_vertices(),
            self.bodies[b].global_vertices(),
        ) {
            (Some(va), Some(vb)) => is_colliding(va, vb),
            _ => false,
        };
        if !hit {
            return;
        }

        let (body_a, body_b) = pair_mut(&mut self.bodies, a, b);
        let impulse_applied = bounce(body_a, body_b, self.restitution);
        report.colliding[a] = true;
        report.colliding[b] = true;
        report.contacts.push(Contact {
            a: BodyHandle(a),
            b: BodyHandle(b),
            impulse_applied,
        });
        debug!("Contact between bodies {} and {} (impulse: {})", a, b, impulse_applied);
    }
}

/// Two distinct mutable borrows out of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
