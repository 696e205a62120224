//! Pure 2D polygon queries used by outline rasterisation.
//!
//! Polygons are ordered vertex slices; the closing edge from the last vertex
//! back to the first is implicit.

use bevy::math::Vec2;

/// Even-odd ray casting test.
///
/// A horizontal ray is cast towards +X and every edge whose Y-extent
/// straddles the point toggles the result.  The straddle test is half-open
/// (`y > p.y` on one end only), so horizontal edges never count and the
/// crossing X is never computed with a zero denominator.
///
/// Boundary convention: points on a left or bottom edge of an axis-aligned
/// polygon count as inside, points on a right or top edge count as outside.
pub fn point_in_polygon(vertices: &[Vec2], point: Vec2) -> bool {
    let Some(&last) = vertices.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in vertices {
        if (curr.y > point.y) != (prev.y > point.y) {
            let crossing_x = prev.x + (point.y - prev.y) * (curr.x - prev.x) / (curr.y - prev.y);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Euclidean distance from `p` to the closed segment `a..b`.
///
/// A zero-length segment degenerates to the distance to `a`.
pub fn distance_to_segment(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let ab = b - a;
    let projection = (p - a).dot(ab);
    if projection <= 0.0 {
        return p.distance(a);
    }

    let length_sq = ab.length_squared();
    if length_sq <= projection {
        return p.distance(b);
    }

    p.distance(a + ab * (projection / length_sq))
}

/// Minimum distance from `p` to any edge of the polygon, including the
/// closing edge.  Returns `f32::INFINITY` for an empty slice.
pub fn distance_to_polygon(vertices: &[Vec2], p: Vec2) -> f32 {
    edges(vertices)
        .map(|(a, b)| distance_to_segment(a, b, p))
        .fold(f32::INFINITY, f32::min)
}

/// Iterate `(start, end)` pairs for every edge, wrapping last → first.
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
