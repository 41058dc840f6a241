//! Reproducible integer point clouds (uniform boxes + rounded regular polygons).
//!
//! Purpose
//! - Feed benches, property tests, and the CLI `random` command with point
//!   sets that can be replayed from a `(seed, index)` token.
//!
//! Code cross-refs: `types::PointSet`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Point, PointSet};

/// Axis-aligned sampling box (inclusive on both ends).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Canvas-like box `[0, width] × [0, height]`.
    pub fn canvas(width: i32, height: i32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(width, height),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// Uniform point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    pub bounds: Bounds,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 50,
            bounds: Bounds::canvas(800, 600),
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
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points uniformly from `cfg.bounds`. Duplicates may occur.
///
/// Bounds with `min > max` on an axis are swapped.
pub fn random_points(cfg: PointCloudCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let (x0, x1) = ordered(cfg.bounds.min.x, cfg.bounds.max.x);
    let (y0, y1) = ordered(cfg.bounds.min.y, cfg.bounds.max.y);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(x0..=x1), rng.gen_range(y0..=y1)))
        .collect()
}

/// Vertices of a regular `n`-gon (counter-clockwise, first vertex at angle 0),
/// rounded to the integer grid. `n` is clamped to at least 3.
///
/// Rounding can make a small polygon non-convex; keep `radius` well above `n`.
pub fn regular_polygon(n: usize, radius: f64, center: Point) -> Vec<Point> {
    let n = n.max(3);
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let th = k as f64 * delta;
            Point::new(
                center.x + (radius * th.cos()).round() as i32,
                center.y + (radius * th.sin()).round() as i32,
            )
        })
        .collect()
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::is_strictly_convex_ccw;

    #[test]
    fn reproducible_draw() {
        let cfg = PointCloudCfg {
            count: 40,
            bounds: Bounds::canvas(100, 50),
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = random_points(cfg, tok);
        let b = random_points(cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.as_slice().iter().all(|&p| cfg.bounds.contains(p)));
        let c = random_points(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let cfg = PointCloudCfg {
            count: 10,
            bounds: Bounds {
                min: Point::new(10, 10),
                max: Point::new(-10, -10),
            },
        };
        let set = random_points(cfg, ReplayToken { seed: 1, index: 0 });
        assert!(set
            .as_slice()
            .iter()
            .all(|p| (-10..=10).contains(&p.x) && (-10..=10).contains(&p.y)));
    }

    #[test]
    fn regular_polygon_is_convex() {
        for n in [3, 5, 8, 16] {
            let poly = regular_polygon(n, 1000.0, Point::new(400, 300));
            assert_eq!(poly.len(), n);
            assert!(is_strictly_convex_ccw(&poly), "n={n}");
        }
    }
}
