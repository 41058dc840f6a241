//! Common seam for the two interchangeable hull algorithms.

use crate::brute_force::BruteForceHull;
use crate::monotone::MonotoneChainHull;
use crate::types::{Algorithm, AlgorithmResult, HullError, Point};

/// A convex-hull algorithm over integer points.
///
/// Implementations are pure: they borrow an immutable snapshot, keep no state
/// between calls, and return a fresh result. Calling twice on the same input
/// yields identical results.
pub trait HullAlgorithm {
    fn algorithm(&self) -> Algorithm;

    /// Fails with [`HullError::InsufficientPoints`] for fewer than three points.
    fn compute(&self, points: &[Point]) -> Result<AlgorithmResult, HullError>;
}

/// Run `algorithm` with its default configuration.
pub fn compute_hull(algorithm: Algorithm, points: &[Point]) -> Result<AlgorithmResult, HullError> {
    match algorithm {
        Algorithm::BruteForce => BruteForceHull::default().compute(points),
        Algorithm::MonotoneChain => MonotoneChainHull.compute(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_labels_results() {
        let square = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        for algo in Algorithm::ALL {
            let res = compute_hull(algo, &square).unwrap();
            assert_eq!(res.algorithm, algo);
            assert_eq!(res.vertex_count(), 4);
        }
        assert_eq!(BruteForceHull::default().algorithm(), Algorithm::BruteForce);
        assert_eq!(MonotoneChainHull.algorithm(), Algorithm::MonotoneChain);
    }
}
