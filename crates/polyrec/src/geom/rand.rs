//! Random lattice polygons (deterministic via replay tokens).
//!
//! Purpose
//! - Provide small, reproducible samplers for the shapes the property tests
//!   and benchmarks need: axis-aligned rectangles, non-degenerate triangles,
//!   and convex lattice polygons.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so any draw can be replayed from its token alone.
//! - Convex sampling takes the convex hull of random lattice points;
//!   collinear points are dropped so every hull vertex is a strict corner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LatticeCfg {
    /// Coordinates are drawn from `[-span, span]`. Clamped to >= 1.
    pub span: i64,
    /// Candidate point count for convex sampling.
    pub candidates: usize,
}

impl Default for LatticeCfg {
    fn default() -> Self {
        Self {
            span: 100,
            candidates: 24,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned lattice rectangle, 4 vertices in traversal order.
pub fn draw_rectangle(cfg: LatticeCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let span = cfg.span.max(1);
    let x0 = rng.gen_range(-span..span);
    let y0 = rng.gen_range(-span..span);
    let w = rng.gen_range(1..=span);
    let h = rng.gen_range(1..=span);
    Polygon::new(vec![
        Point::new(x0, y0),
        Point::new(x0, y0 + h),
        Point::new(x0 + w, y0 + h),
        Point::new(x0 + w, y0),
    ])
}

/// Non-degenerate lattice triangle (resamples collinear triples).
pub fn draw_triangle(cfg: LatticeCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let span = cfg.span.max(1);
    loop {
        let mut draw = || Point::new(rng.gen_range(-span..=span), rng.gen_range(-span..=span));
        let (a, b, c) = (draw(), draw(), draw());
        if cross(a, b, c) != 0 {
            return Polygon::new(vec![a, b, c]);
        }
    }
}

/// Convex lattice polygon via the hull of random lattice points.
///
/// `None` when the candidates collapse onto a line or point. Hull vertices
/// come out in CCW order.
pub fn draw_convex(cfg: LatticeCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let span = cfg.span.max(1);
    let n = cfg.candidates.max(3);
    let pts: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen_range(-span..=span), rng.gen_range(-span..=span)))
        .collect();
    let hull = convex_hull(&pts)?;
    if hull.len() < 3 {
        return None;
    }
    Some(Polygon::new(hull))
}

/// Exact orientation of `o -> a -> b` (positive for a left turn).
#[inline]
fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (abx, aby) = ((a.x - o.x) as i128, (a.y - o.y) as i128);
    let (acx, acy) = ((b.x - o.x) as i128, (b.y - o.y) as i128);
    abx * acy - aby * acx
}

/// Andrew's monotone chain over lattice points (CCW order, corners only).
fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by_key(|p| (p.x, p.y));
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}
