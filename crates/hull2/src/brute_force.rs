//! Brute-force convex hull by exhaustive edge validation (O(n³)).
//!
//! Model
//! - Every ordered pair `(p, q)` of coordinate-distinct input points is a
//!   candidate directed edge. It is a hull edge iff no other point lies
//!   strictly left of `p → q`, i.e. the remaining points all sit on or right of
//!   the line. Valid edges therefore run clockwise around the hull.
//! - Endpoints of valid edges are collected (deduplicated by coordinates) and
//!   ordered by polar angle `atan2(y − cy, x − cx)` about their centroid,
//!   ascending, which yields counter-clockwise order.
//!
//! Collinear boundary points
//! - With `CollinearPolicy::Retain` (default) a point lying in the interior of
//!   a hull edge is kept as a vertex, so the vertex set may be a superset of the
//!   monotone-chain result.
//! - With `CollinearPolicy::ExtremesOnly` an edge is rejected if some collinear
//!   point falls outside the closed segment, leaving exactly the extreme
//!   points.
//!
//! Iterations
//! - Reported as the bound `n·(n−1)·(n−2)`, not measured.
//!
//! Code cross-refs: `predicates::{is_left_of, on_segment}`, `monotone`

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::algorithm::HullAlgorithm;
use crate::predicates::{is_left_of, on_segment, orientation};
use crate::types::{Algorithm, AlgorithmResult, HullError, Point};

/// How points in the interior of a hull edge are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Keep every endpoint of every valid edge.
    #[default]
    Retain,
    /// Keep extreme points only (same vertex set as the monotone chain).
    ExtremesOnly,
}

/// Brute-force configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BruteForceCfg {
    pub collinear: CollinearPolicy,
}

/// O(n³) hull. Stateless apart from its configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceHull {
    pub cfg: BruteForceCfg,
}

impl BruteForceHull {
    pub fn new(cfg: BruteForceCfg) -> Self {
        Self { cfg }
    }
}

impl HullAlgorithm for BruteForceHull {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
    }

    fn compute(&self, points: &[Point]) -> Result<AlgorithmResult, HullError> {
        HullError::check_len(points)?;
        let edges = valid_edges(points, self.cfg.collinear);
        let hull = hull_from_edges(&edges);
        let result = AlgorithmResult {
            hull,
            iterations: exhaustive_iterations(points.len()),
            algorithm: Algorithm::BruteForce,
        };
        tracing::debug!(
            n = points.len(),
            edges = edges.len(),
            hull = result.hull.len(),
            iterations = result.iterations,
            "brute_force_hull"
        );
        Ok(result)
    }
}

/// Brute-force hull with the default configuration.
pub fn compute_brute_force_hull(points: &[Point]) -> Result<AlgorithmResult, HullError> {
    BruteForceHull::default().compute(points)
}

/// `n·(n−1)·(n−2)`, saturating at `u64::MAX`.
pub fn exhaustive_iterations(n: usize) -> u64 {
    let n = n as u64;
    if n < 3 {
        return 0;
    }
    n.saturating_mul(n - 1).saturating_mul(n - 2)
}

/// All directed edges `p → q` with every other point on or right of the line.
fn valid_edges(points: &[Point], policy: CollinearPolicy) -> Vec<(Point, Point)> {
    let mut edges = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        for (j, &q) in points.iter().enumerate() {
            if i == j || p == q {
                continue;
            }
            let valid = points.iter().enumerate().all(|(k, &r)| {
                if k == i || k == j {
                    return true;
                }
                if is_left_of(r, p, q) {
                    return false;
                }
                match policy {
                    CollinearPolicy::Retain => true,
                    CollinearPolicy::ExtremesOnly => {
                        orientation(p, q, r) != 0 || on_segment(r, p, q)
                    }
                }
            });
            if valid {
                edges.push((p, q));
            }
        }
    }
    edges
}

/// Unique edge endpoints sorted by angle about their centroid.
///
/// Returns an empty hull if fewer than three unique vertices remain or if they
/// are all collinear (no polygon).
fn hull_from_edges(edges: &[(Point, Point)]) -> Vec<Point> {
    let unique: BTreeSet<Point> = edges.iter().flat_map(|&(p, q)| [p, q]).collect();
    if unique.len() < 3 {
        return Vec::new();
    }
    let mut vertices: Vec<Point> = unique.into_iter().collect();
    let a = vertices[0];
    let b = vertices[vertices.len() - 1];
    if vertices.iter().all(|&v| orientation(a, b, v) == 0) {
        return Vec::new();
    }

    let sum = vertices
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, v| acc + v.to_f64());
    let c = sum / vertices.len() as f64;
    let angle = |v: &Point| {
        let d = v.to_f64() - c;
        d.y.atan2(d.x)
    };
    vertices.sort_by(|u, v| {
        angle(u)
            .partial_cmp(&angle(v))
            .unwrap_or(Ordering::Equal)
            .then_with(|| u.cmp(v))
    });
    vertices
}
