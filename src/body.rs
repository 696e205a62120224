//! Simulated asteroid bodies.
//!
//! A [`Body`] owns its generated [`Outline`] and its pose.  World-space
//! vertices are cached per tick by [`Body::recompute_global_vertices`]; they
//! are `None` until the first pose computation.

use crate::outline::{Outline, OutlineMask};
use bevy::math::Vec2;

/// A free-floating polygonal asteroid.
#[derive(Debug, Clone)]
pub struct Body {
    /// World-space centre.
    pub position: Vec2,
    /// Linear velocity, world units per tick.
    pub trajectory: Vec2,
    /// Accumulated heading in degrees; never normalised.
    pub rotation_degrees: f32,
    /// Degrees added to the heading every tick.
    pub spin: f32,
    /// Uniform geometry and texture scale.
    pub scale: f32,
    outline: Outline,
    global_vertices: Option<Vec<Vec2>>,
}

impl Body {
    pub fn new(outline: Outline, position: Vec2, trajectory: Vec2, spin: f32) -> Self {
        Self {
            position,
            trajectory,
            rotation_degrees: 0.0,
            spin,
            scale: 1.0,
            outline,
            global_vertices: None,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn local_vertices(&self) -> &[Vec2] {
        &self.outline.local_vertices
    }

    pub fn texture_center(&self) -> Vec2 {
        self.outline.texture_center
    }

    /// World-space vertices as of the last [`Self::recompute_global_vertices`].
    pub fn global_vertices(&self) -> Option<&[Vec2]> {
        self.global_vertices.as_deref()
    }

    /// Advance heading and position by one tick.  Invalidates the cached
    /// world vertices until they are recomputed.
    pub fn integrate(&mut self) {
        self.rotation_degrees += self.spin;
        self.position += self.trajectory;
        self.global_vertices = None;
    }

    /// Map every local vertex through centre → scale → rotate → translate at
    /// the current pose.
    pub fn recompute_global_vertices(&mut self) {
        let rotation = Vec2::from_angle(self.rotation_degrees.to_radians());
        let center = self.outline.texture_center;
        let vertices = self
            .outline
            .local_vertices
            .iter()
            .map(|&local| rotation.rotate((local - center) * self.scale) + self.position)
            .collect();
        self.global_vertices = Some(vertices);
    }
}

/// Debug tint reflecting the collision flag of the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionTint {
    /// Overlapping at least one other body (drawn white).
    Colliding,
    /// Not overlapping anything (drawn black).
    Clear,
}

/// Read-only view of a body for presentation layers.
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot<'a> {
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub scale: f32,
    pub texture_center: Vec2,
    pub mask: &'a OutlineMask,
    pub global_vertices: Option<&'a [Vec2]>,
    pub colliding: bool,
}

impl BodySnapshot<'_> {
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    pub fn tint(&self) -> CollisionTint {
        if self.colliding {
            CollisionTint::Colliding
        } else {
            CollisionTint::Clear
        }
    }
}
