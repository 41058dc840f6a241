//! Value types shared by both hull algorithms.
//!
//! - `Point`: integer pair, lexicographically ordered (x, then y).
//! - `PointSet`: caller-owned snapshot of entered points (duplicates kept).
//! - `AlgorithmResult`: hull polygon + iteration counter + algorithm label.
//! - `HullError`: the insufficient-points outcome.
//!
//! Code cross-refs: `brute_force::BruteForceHull`, `monotone::MonotoneChainHull`

use nalgebra::Vector2;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Minimum input size for which either algorithm is defined.
pub const MIN_POINTS: usize = 3;

/// Integer point in the plane.
///
/// Field order matters: the derived `Ord` is lexicographic by `x`, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_f64(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered collection of points as entered. Not deduplicated.
///
/// The algorithms only ever see `&[Point]` borrowed from a snapshot like this
/// one; they never mutate it and keep no state between calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Number of coordinate-distinct points.
    pub fn distinct_count(&self) -> usize {
        self.points.iter().collect::<BTreeSet<_>>().len()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Point]> for PointSet {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Which hull algorithm produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// O(n³) edge-validity test over all ordered pairs.
    BruteForce,
    /// Andrew's monotone chain, O(n log n).
    MonotoneChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::MonotoneChain];

    /// Display label shown next to the statistics.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Slow Convex Hull",
            Algorithm::MonotoneChain => "Fast Convex Hull",
        }
    }

    /// Short machine-friendly key (used in file names and JSON).
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::MonotoneChain => "monotone-chain",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute" | "brute-force" | "bruteforce" | "slow" => Ok(Algorithm::BruteForce),
            "monotone" | "monotone-chain" | "andrew" | "fast" => Ok(Algorithm::MonotoneChain),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}

/// Unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected brute-force or monotone-chain)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Output of one hull computation.
///
/// Created fresh per call and never mutated afterwards; callers drop it
/// whenever the underlying point set changes.
///
/// Iteration semantics differ per algorithm, on purpose:
/// - `BruteForce`: the theoretical bound `n·(n−1)·(n−2)` for `n` input points,
///   independent of the configuration of the points. Nothing is measured.
/// - `MonotoneChain`: the measured number of chain steps, i.e. every point
///   appended after the two seed points of each chain plus every removal.
///
/// The two counters are therefore not comparable as "work done"; the first
/// shows the complexity class, the second the actual operation count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmResult {
    /// Hull vertices in the algorithm's traversal order (see each algorithm).
    pub hull: Vec<Point>,
    pub iterations: u64,
    pub algorithm: Algorithm,
}

impl AlgorithmResult {
    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.hull.len()
    }

    /// True if no polygon was produced (degenerate input).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hull.is_empty()
    }
}

/// Error type shared by both hull algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than [`MIN_POINTS`] points were supplied.
    InsufficientPoints { found: usize },
}

impl HullError {
    pub(crate) fn check_len(points: &[Point]) -> Result<(), HullError> {
        if points.len() < MIN_POINTS {
            return Err(HullError::InsufficientPoints {
                found: points.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found } => write!(
                f,
                "insufficient points: need at least {MIN_POINTS}, got {found}"
            ),
        }
    }
}

impl std::error::Error for HullError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_order_is_x_then_y() {
        let mut pts = vec![
            Point::new(2, 0),
            Point::new(0, 5),
            Point::new(0, -1),
            Point::new(1, 1),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point::new(0, -1),
                Point::new(0, 5),
                Point::new(1, 1),
                Point::new(2, 0)
            ]
        );
    }

    #[test]
    fn point_set_keeps_duplicates() {
        let mut set = PointSet::new();
        set.push(Point::new(1, 1));
        set.push(Point::new(1, 1));
        set.push(Point::new(2, 3));
        assert_eq!(set.len(), 3);
        assert_eq!(set.distinct_count(), 2);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn algorithm_parse_and_labels() {
        assert_eq!("slow".parse::<Algorithm>(), Ok(Algorithm::BruteForce));
        assert_eq!(
            "Monotone-Chain".parse::<Algorithm>(),
            Ok(Algorithm::MonotoneChain)
        );
        assert!("quickhull".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::BruteForce.name(), "Slow Convex Hull");
        assert_eq!(Algorithm::MonotoneChain.to_string(), "Fast Convex Hull");
    }

    #[test]
    fn insufficient_points_message() {
        let err = HullError::check_len(&[Point::new(0, 0)]).unwrap_err();
        assert_eq!(err, HullError::InsufficientPoints { found: 1 });
        assert_eq!(
            err.to_string(),
            "insufficient points: need at least 3, got 1"
        );
    }
}
