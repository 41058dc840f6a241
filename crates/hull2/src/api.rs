//! Curated surface for the presentation layer and tooling.
//!
//! Prefer these re-exports over reaching into individual modules.

// Entry points
pub use crate::algorithm::{compute_hull, HullAlgorithm};
pub use crate::brute_force::{
    compute_brute_force_hull, exhaustive_iterations, BruteForceCfg, BruteForceHull,
    CollinearPolicy,
};
pub use crate::monotone::{compute_monotone_chain_hull, MonotoneChainHull};
// Data model
pub use crate::types::{
    Algorithm, AlgorithmResult, HullError, ParseAlgorithmError, Point, PointSet, MIN_POINTS,
};
// Geometry checks
pub use crate::predicates::{
    is_cyclic_rotation, is_left_of, is_strictly_convex_ccw, is_weakly_convex_ccw, orientation,
    same_vertex_set, signed_area2, turn, Turn,
};
// Sampling
pub use crate::rand::{
    random_points, regular_polygon, Bounds as SampleBounds, PointCloudCfg, ReplayToken,
};
