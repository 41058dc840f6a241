//! Planar convex hulls over integer points.
//!
//! Two interchangeable, pure algorithms share one input shape (`&[Point]`) and
//! one output shape (`AlgorithmResult`):
//! - `brute_force`: O(n³) exhaustive edge validation.
//! - `monotone`: Andrew's monotone chain, O(n log n).
//!
//! Neither keeps state between calls. Callers own the point collection and
//! recompute on demand after it changes.
//!
//! API Policy
//! - `api` holds the curated surface; `prelude` is for quick imports.
//! - Fewer than three points is a first-class outcome (`HullError`), not a panic.

pub mod algorithm;
pub mod api;
pub mod brute_force;
pub mod monotone;
pub mod predicates;
pub mod rand;
pub mod types;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithm::{compute_hull, HullAlgorithm};
pub use brute_force::compute_brute_force_hull;
pub use monotone::compute_monotone_chain_hull;
pub use types::{Algorithm, AlgorithmResult, HullError, Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithm::{compute_hull, HullAlgorithm};
    pub use crate::brute_force::{
        compute_brute_force_hull, BruteForceCfg, BruteForceHull, CollinearPolicy,
    };
    pub use crate::monotone::{compute_monotone_chain_hull, MonotoneChainHull};
    pub use crate::predicates::{is_left_of, orientation};
    pub use crate::types::{Algorithm, AlgorithmResult, HullError, Point, PointSet};
}
