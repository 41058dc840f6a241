//! Presentation-side state: the entered points and the last shown result.
//!
//! The engine keeps nothing between calls, so the point collection lives
//! here. Any edit drops the current result; a new one is computed only when
//! `run` is called.

use hull2::brute_force::{BruteForceCfg, BruteForceHull};
use hull2::monotone::MonotoneChainHull;
use hull2::{Algorithm, AlgorithmResult, HullAlgorithm, HullError, Point, PointSet};

#[derive(Debug, Default)]
pub struct Session {
    points: PointSet,
    result: Option<AlgorithmResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: PointSet) -> Self {
        Self {
            points,
            result: None,
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn result(&self) -> Option<&AlgorithmResult> {
        self.result.as_ref()
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
        self.result = None;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.result = None;
    }

    /// Recompute with `algorithm` (default configuration).
    pub fn run(&mut self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        match algorithm {
            Algorithm::BruteForce => self.run_with(&BruteForceHull::default()),
            Algorithm::MonotoneChain => self.run_with(&MonotoneChainHull),
        }
    }

    pub fn run_brute_force(&mut self, cfg: BruteForceCfg) -> Option<&AlgorithmResult> {
        self.run_with(&BruteForceHull::new(cfg))
    }

    /// Recompute from scratch. With fewer than three points nothing is shown.
    pub fn run_with<A: HullAlgorithm>(&mut self, algo: &A) -> Option<&AlgorithmResult> {
        self.result = match algo.compute(self.points.as_slice()) {
            Ok(res) => Some(res),
            Err(HullError::InsufficientPoints { found }) => {
                tracing::info!(algorithm = algo.algorithm().key(), found, "not enough points");
                None
            }
        };
        self.result.as_ref()
    }

    /// Overlay lines for the current result; empty if nothing is shown.
    pub fn statistics(&self) -> Vec<String> {
        match &self.result {
            Some(res) => statistics_lines(res, self.points.len()),
            None => Vec::new(),
        }
    }
}

/// `Algorithm`, `Points`, `Hull Vertices`, `Iterations` lines for `result` over `n` points.
pub fn statistics_lines(result: &AlgorithmResult, n: usize) -> Vec<String> {
    vec![
        format!("Algorithm: {}", result.algorithm_name()),
        format!("Points: {n}"),
        format!("Hull Vertices: {}", result.vertex_count()),
        format!("Iterations: {}", result.iterations),
    ]
}
