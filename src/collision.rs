//! Polygon overlap detection and elastic bounce resolution.
//!
//! Detection uses the separating-axis theorem over the edge normals of both
//! polygons.  It is exact for convex polygons; generated outlines are only
//! near-convex and are treated as their convex approximation.
//!
//! Resolution applies an equal-mass impulse along the centre-to-centre
//! direction.  No positional correction is made, so bodies may keep
//! overlapping for a few ticks after bouncing.

use crate::body::Body;
use crate::geometry::edges;
use bevy::math::Vec2;

/// Unit normals of every edge, one per vertex (closing edge included).
///
/// Each normal is the edge rotated 90° counter-clockwise.  A zero-length edge
/// yields a zero axis, which projects everything to 0 and so never separates.
pub fn edge_axes(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    edges(vertices).map(|(a, b)| (b - a).perp().normalize_or_zero())
}

/// `[min, max]` of the polygon's vertices projected onto `axis`.
pub fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}

/// Whether the two projections overlap on `axis`.  Touching intervals count
/// as overlapping.
fn overlaps_on_axis(a: &[Vec2], b: &[Vec2], axis: Vec2) -> bool {
    let (min_a, max_a) = project(a, axis);
    let (min_b, max_b) = project(b, axis);
    !(max_a < min_b || max_b < min_a)
}

/// Separating-axis overlap test.  Stops at the first separating axis.
///
/// Polygons with fewer than three vertices never collide.
pub fn is_colliding(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    edge_axes(a)
        .chain(edge_axes(b))
        .all(|axis| overlaps_on_axis(a, b, axis))
}

/// Apply an equal-mass impulse to two overlapping bodies.
///
/// Returns `false` without touching either body when they are already
/// separating along the centre-to-centre normal.
pub fn bounce(a: &mut Body, b: &mut Body, restitution: f32) -> bool {
    let normal = (b.position - a.position).normalize_or_zero();
    let relative_velocity = b.trajectory - a.trajectory;
    let velocity_along_normal = relative_velocity.dot(normal);

    if velocity_along_normal > 0.0 {
        return false;
    }

    // Unit masses: the impulse is shared equally.
    let impulse_scalar = -(1.0 + restitution) * velocity_along_normal / 2.0;
    let impulse = normal * impulse_scalar;
    a.trajectory -= impulse;
    b.trajectory += impulse;
    true
}
