//! Andrew's monotone chain convex hull (O(n log n)).
//!
//! Model
//! - Sort by `Point` order (x, then y).
//! - Upper chain: seed with the two smallest points, scan forward; after each
//!   append, drop the middle of the last three while they do not turn left
//!   (`orientation <= 0`, so collinear triples are dropped too).
//! - Lower chain: same, seeded with the two largest points, scanning backward.
//! - Hull = upper chain + lower chain without its first and last point.
//!
//! "Upper" follows screen coordinates (y grows downward). In a y-up frame the
//! first chain runs along the bottom, and the hull comes out counter-clockwise.
//!
//! Iterations
//! - Measured: one per point appended after the two seeds of each chain, plus
//!   one per removal. See `types::AlgorithmResult` for how this differs from
//!   the brute-force counter.

use crate::algorithm::HullAlgorithm;
use crate::predicates::orientation;
use crate::types::{Algorithm, AlgorithmResult, HullError, Point};

/// Andrew's monotone chain. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChainHull;

impl HullAlgorithm for MonotoneChainHull {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MonotoneChain
    }

    fn compute(&self, points: &[Point]) -> Result<AlgorithmResult, HullError> {
        HullError::check_len(points)?;
        let mut sorted = points.to_vec();
        sorted.sort_unstable();

        let mut iterations = 0u64;
        let upper = build_chain(sorted.iter().copied(), &mut iterations);
        let lower = build_chain(sorted.iter().rev().copied(), &mut iterations);

        let mut hull = upper;
        if lower.len() > 2 {
            hull.extend_from_slice(&lower[1..lower.len() - 1]);
        }
        // Only reachable when every input point coincides.
        if hull.len() == 2 && hull[0] == hull[1] {
            hull.truncate(1);
        }

        tracing::debug!(
            n = points.len(),
            hull = hull.len(),
            iterations,
            "monotone_chain_hull"
        );
        Ok(AlgorithmResult {
            hull,
            iterations,
            algorithm: Algorithm::MonotoneChain,
        })
    }
}

/// Monotone chain entry point.
pub fn compute_monotone_chain_hull(points: &[Point]) -> Result<AlgorithmResult, HullError> {
    MonotoneChainHull.compute(points)
}

/// One chain over `pts` (already in scan order); bumps `iterations` per append
/// after the two seeds and per removal.
fn build_chain(mut pts: impl Iterator<Item = Point>, iterations: &mut u64) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    chain.extend(pts.by_ref().take(2));
    for p in pts {
        *iterations += 1;
        chain.push(p);
        while chain.len() > 2 {
            let k = chain.len();
            if orientation(chain[k - 3], chain[k - 2], chain[k - 1]) > 0 {
                break;
            }
            *iterations += 1;
            // Last element takes the removed slot; order is preserved.
            chain.swap_remove(k - 2);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::is_strictly_convex_ccw;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&t| Point::from(t)).collect()
    }

    #[test]
    fn chain_counts_appends_and_removals() {
        let mut it = 0;
        let chain = build_chain(pts(&[(0, 0), (1, 1), (2, 2), (3, 0)]).into_iter(), &mut it);
        // (1,1) removed when (2,2) arrives, (2,2) removed when (3,0) arrives.
        assert_eq!(chain, pts(&[(0, 0), (3, 0)]));
        assert_eq!(it, 4);
    }

    #[test]
    fn triangle_any_input_order() {
        let a = compute_monotone_chain_hull(&pts(&[(5, 5), (0, 0), (10, 0)])).unwrap();
        let b = compute_monotone_chain_hull(&pts(&[(10, 0), (5, 5), (0, 0)])).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hull, pts(&[(0, 0), (10, 0), (5, 5)]));
        assert!(is_strictly_convex_ccw(&a.hull));
        // One append per chain, plus dropping (5,5) from the first chain.
        assert_eq!(a.iterations, 3);
    }

    #[test]
    fn collinear_edge_points_are_dropped() {
        let res =
            compute_monotone_chain_hull(&pts(&[(0, 0), (2, 0), (4, 0), (4, 4), (0, 4), (2, 4)]))
                .unwrap();
        assert_eq!(res.hull, pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
    }

    #[test]
    fn duplicates_are_absorbed() {
        let res =
            compute_monotone_chain_hull(&pts(&[(0, 0), (0, 0), (4, 0), (0, 4), (4, 0)])).unwrap();
        assert_eq!(res.hull, pts(&[(0, 0), (4, 0), (0, 4)]));
    }

    #[test]
    fn coincident_points_collapse_to_one_vertex() {
        let res = compute_monotone_chain_hull(&pts(&[(3, 3), (3, 3), (3, 3)])).unwrap();
        assert_eq!(res.hull, pts(&[(3, 3)]));
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert_eq!(
            compute_monotone_chain_hull(&[]).unwrap_err(),
            HullError::InsufficientPoints { found: 0 }
        );
    }
}
