//! Vector arithmetic and the two area algorithms.
//!
//! Two independent area computations are kept on purpose:
//! - [`signed_area`]/[`area`]: shoelace accumulation, correct for arbitrary
//!   simple polygons, concave included. The oracle when the two disagree.
//! - [`area_triangulated`]: sliding-window triangle decomposition summed by
//!   Heron's formula. Exact only where the window triangles tile the polygon
//!   without overlap (convex or star-shaped cases; see [`StripTriangles`]).

use nalgebra::Vector2;

use super::types::{Point, Polygon, Triangle};

/// Edge vector from `begin` to `end` with real components.
#[inline]
pub fn edge(begin: Point, end: Point) -> Vector2<f64> {
    Vector2::new((end.x - begin.x) as f64, (end.y - begin.y) as f64)
}

/// Cosine of the angle between `a` and `b`: `a·b / (|a| |b|)`.
///
/// Precondition: neither vector has zero length. A zero-length input yields
/// NaN; callers must rule it out, there is no guard here.
#[inline]
pub fn cos_between(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.dot(b) / (a.norm() * b.norm())
}

/// Triangle area by Heron's formula from the three pairwise side lengths.
pub fn triangle_area(t: &Triangle) -> f64 {
    let a = edge(t.a, t.b).norm();
    let b = edge(t.b, t.c).norm();
    let c = edge(t.a, t.c).norm();
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Sliding-window triangle decomposition of a polygon.
///
/// Starts with `(v0, v1, v2)`; each further triangle reuses the last two
/// points of the previous one and introduces the next unused vertex:
/// `(prev.b, prev.c, v[i])` for `i` in `3..K`. Yields exactly `K - 2`
/// triangles for `K >= 3` vertices and nothing below that.
pub struct StripTriangles<'a> {
    points: &'a [Point],
    prev: Option<Triangle>,
    next: usize,
}

impl<'a> StripTriangles<'a> {
    #[inline]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            points: &polygon.points,
            prev: None,
            next: 3,
        }
    }
}

impl Iterator for StripTriangles<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        let t = match self.prev {
            None => {
                if self.points.len() < 3 {
                    return None;
                }
                Triangle {
                    a: self.points[0],
                    b: self.points[1],
                    c: self.points[2],
                }
            }
            Some(prev) => {
                let v = *self.points.get(self.next)?;
                self.next += 1;
                Triangle {
                    a: prev.b,
                    b: prev.c,
                    c: v,
                }
            }
        };
        self.prev = Some(t);
        Some(t)
    }
}

/// Polygon area as the sum of Heron areas over the sliding-window triangles.
///
/// For polygons the window does not tile (concave ones in particular) this
/// can double-count or omit area; prefer [`area`] when correctness for
/// arbitrary simple polygons is required.
pub fn area_triangulated(polygon: &Polygon) -> f64 {
    StripTriangles::new(polygon).map(|t| triangle_area(&t)).sum()
}

/// Shoelace area with orientation sign, anchored at the first vertex.
///
/// Positive for counter-clockwise traversal. Polygons with fewer than 3
/// vertices have zero area.
pub fn signed_area(polygon: &Polygon) -> f64 {
    let pts = &polygon.points;
    if pts.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..pts.len() {
        let p = pts[i];
        let q = pts[(i + 1) % pts.len()];
        acc += (p.x as f64) * (q.y as f64) - (q.x as f64) * (p.y as f64);
    }
    acc * 0.5
}

/// Absolute shoelace area.
#[inline]
pub fn area(polygon: &Polygon) -> f64 {
    signed_area(polygon).abs()
}
