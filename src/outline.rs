//! Procedural asteroid outlines.
//!
//! An outline is an irregular polygon built by jittering evenly spaced points
//! on a circle, plus a square pixel mask holding a stroked rendition of its
//! boundary.  Generation runs once per body at spawn time; the result is
//! immutable afterwards.
//!
//! Jitter can create small local concavities, so outlines are only
//! *near*-convex.  The separating-axis collision test treats them as convex.

use crate::geometry::{distance_to_polygon, point_in_polygon};
use crate::sampler::UniformSampler;
use bevy::math::Vec2;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

/// Shape parameters for [`generate_outline`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineParams {
    /// Nominal vertex distance from the texture centre.
    pub max_radius: f32,
    /// Stroke width of the rasterised mask.
    pub line_thickness: f32,
    /// Inclusive range the vertex count is drawn from.
    pub vertex_count: RangeInclusive<usize>,
    /// Maximum angular offset per vertex (radians).
    pub angle_jitter: f32,
    /// Maximum radius offset per vertex, as a fraction of `max_radius`.
    pub radius_jitter: f32,
    /// Texture half-extent multiplier applied to `max_radius`.
    pub texture_margin: f32,
}

impl OutlineParams {
    /// Side length of the square canvas the outline is drawn on.
    pub fn texture_width(&self) -> u32 {
        ((self.max_radius * self.texture_margin + self.line_thickness) * 2.0).ceil() as u32
    }
}

/// Row-major paint mask, `width × width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineMask {
    width: u32,
    painted: Vec<bool>,
}

impl OutlineMask {
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether pixel `(x, y)` is opaque.  Out-of-range coordinates are
    /// transparent.
    pub fn is_painted(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        self.painted[y as usize * self.width as usize + x as usize]
    }

    /// Number of opaque pixels.
    pub fn painted_count(&self) -> usize {
        self.painted.iter().filter(|&&p| p).count()
    }

    /// Raw row-major pixel flags.
    pub fn pixels(&self) -> &[bool] {
        &self.painted
    }
}

/// A generated polygon together with its canvas and stroke mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Vertices in texture space (origin at the canvas' top-left corner).
    pub local_vertices: Vec<Vec2>,
    pub texture_width: u32,
    /// Canvas centre; also the rotation pivot of the body.
    pub texture_center: Vec2,
    pub max_radius: f32,
    pub line_thickness: f32,
    pub mask: OutlineMask,
}

impl Outline {
    /// Build an outline from an explicit vertex list already expressed in
    /// texture space on a `texture_width` canvas.
    pub fn from_vertices(local_vertices: Vec<Vec2>, texture_width: u32, line_thickness: f32) -> Self {
        let texture_center = Vec2::splat(texture_width as f32 / 2.0);
        let max_radius = local_vertices
            .iter()
            .map(|v| v.distance(texture_center))
            .fold(0.0_f32, f32::max);
        let mask = rasterize(&local_vertices, texture_width, line_thickness);
        Self {
            local_vertices,
            texture_width,
            texture_center,
            max_radius,
            line_thickness,
            mask,
        }
    }
}

/// Generate a random outline.
///
/// Vertex `i` of `n` sits at angle `TAU·i/n ± angle_jitter` and radius
/// `max_radius·(1 ± radius_jitter)` around the texture centre.
pub fn generate_outline(sampler: &mut impl UniformSampler, params: &OutlineParams) -> Outline {
    let texture_width = params.texture_width();
    let texture_center = Vec2::splat(texture_width as f32 / 2.0);

    let n = sampler.uniform(*params.vertex_count.start(), *params.vertex_count.end());
    let radius_offset = params.max_radius * params.radius_jitter;

    let local_vertices = (0..n)
        .map(|i| {
            let base_angle = TAU * i as f32 / n as f32;
            let angle = base_angle + sampler.uniform(-params.angle_jitter, params.angle_jitter);
            let radius = params.max_radius + sampler.uniform(-radius_offset, radius_offset);
            texture_center + Vec2::from_angle(angle) * radius
        })
        .collect::<Vec<_>>();

    let mask = rasterize(&local_vertices, texture_width, params.line_thickness);

    Outline {
        local_vertices,
        texture_width,
        texture_center,
        max_radius: params.max_radius,
        line_thickness: params.line_thickness,
        mask,
    }
}

/// Paint every pixel inside the polygon whose distance to the boundary,
/// offset by `line_thickness`, is within `line_thickness`.
///
/// The band runs from the edge to `2·line_thickness` inward, so the result is
/// a hollow stroke rather than a fill.
pub fn rasterize(vertices: &[Vec2], width: u32, line_thickness: f32) -> OutlineMask {
    let mut painted = Vec::with_capacity(width as usize * width as usize);
    for y in 0..width {
        for x in 0..width {
            let pixel = Vec2::new(x as f32, y as f32);
            let inside = point_in_polygon(vertices, pixel);
            let edge_distance = distance_to_polygon(vertices, pixel) - line_thickness;
            painted.push(inside && edge_distance.abs() <= line_thickness);
        }
    }
    OutlineMask { width, painted }
}
