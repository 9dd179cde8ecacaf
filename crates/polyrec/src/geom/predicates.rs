//! Boolean classifications over polygons.

use super::kernel::{cos_between, edge};
use super::types::{Point, Polygon};

/// Rectangle test for 4-vertex polygons.
///
/// Edge vectors are taken in traversal order `(v0→v1)`, `(v1→v2)`,
/// `(v2→v3)` and then `(v0→v3)`: the fourth edge is anchored back at `v0`,
/// which fixes exactly which three angle checks are made. The polygon is a
/// rectangle iff each consecutive cosine is exactly `0.0`: no tolerance, so
/// the test is reliable for lattice-aligned right angles only (integer dot
/// products hit zero exactly). Repeated consecutive vertices make a cosine
/// NaN and the test comes out `false`.
pub fn is_rectangle(polygon: &Polygon) -> bool {
    if polygon.points.len() != 4 {
        return false;
    }
    let v = &polygon.points;
    let first = edge(v[0], v[1]);
    let second = edge(v[1], v[2]);
    let third = edge(v[2], v[3]);
    let fourth = edge(v[0], v[3]);
    cos_between(&first, &second) == 0.0
        && cos_between(&second, &third) == 0.0
        && cos_between(&third, &fourth) == 0.0
}

/// Axis-aligned bounding box as `(min, max)` corners, per-axis.
///
/// `None` for an empty vertex list.
pub fn bounding_box(polygon: &Polygon) -> Option<(Point, Point)> {
    let mut it = polygon.points.iter().copied();
    let first = it.next()?;
    let (mut min, mut max) = (first, first);
    for p in it {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Approximate intersection test via bounding-box overlap.
///
/// The boxes intersect unless one lies strictly beyond the other on some
/// axis, so boxes touching along an edge or corner count as intersecting.
/// This is an approximation: two polygons with overlapping boxes need not
/// themselves overlap.
pub fn is_intersect(first: &Polygon, second: &Polygon) -> bool {
    let (Some((fmin, fmax)), Some((smin, smax))) =
        (bounding_box(first), bounding_box(second))
    else {
        return false;
    };
    fmin.x <= smax.x && smin.x <= fmax.x && fmin.y <= smax.y && smin.y <= fmax.y
}
