//! Exact integer predicates shared by both algorithms.
//!
//! All products are formed in `i128`: coordinate differences of `i32` inputs
//! span up to 2^32, so a 2x2 determinant needs more than 64 bits.

use crate::types::Point;
use std::collections::BTreeSet;

/// Turn direction of `o → a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Signed cross product of `(a − o)` and `(b − o)`.
///
/// Positive: `b` is counter-clockwise from `a` about `o` (left turn).
/// Negative: clockwise (right turn). Zero: collinear.
#[inline]
pub fn orientation(o: Point, a: Point, b: Point) -> i128 {
    let ax = i128::from(a.x) - i128::from(o.x);
    let ay = i128::from(a.y) - i128::from(o.y);
    let bx = i128::from(b.x) - i128::from(o.x);
    let by = i128::from(b.y) - i128::from(o.y);
    ax * by - ay * bx
}

#[inline]
pub fn turn(o: Point, a: Point, b: Point) -> Turn {
    match orientation(o, a, b).signum() {
        1 => Turn::Left,
        -1 => Turn::Right,
        _ => Turn::Collinear,
    }
}

/// Strictly left of the directed line `start → end`. Collinear is not left.
#[inline]
pub fn is_left_of(p: Point, start: Point, end: Point) -> bool {
    orientation(start, end, p) > 0
}

/// `p` is collinear with `a`,`b` and inside the closed segment `[a, b]`.
#[inline]
pub fn on_segment(p: Point, a: Point, b: Point) -> bool {
    orientation(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Twice the signed (shoelace) area; positive for counter-clockwise order.
pub fn signed_area2(poly: &[Point]) -> i128 {
    let n = poly.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let p = poly[i];
            let q = poly[(i + 1) % n];
            i128::from(p.x) * i128::from(q.y) - i128::from(q.x) * i128::from(p.y)
        })
        .sum()
}

/// Every cyclic triple of `poly` is a strict left turn.
///
/// This is the convexity contract of the monotone-chain output. Polygons with
/// fewer than three vertices are never convex polygons.
pub fn is_strictly_convex_ccw(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) > 0)
}

/// Like [`is_strictly_convex_ccw`] but tolerates collinear consecutive vertices.
pub fn is_weakly_convex_ccw(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    signed_area2(poly) > 0
        && (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) >= 0)
}

/// Equal as unordered sets of coordinates.
pub fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}

/// `b` lists the same cycle as `a`, possibly from a different start vertex.
pub fn is_cyclic_rotation(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|i| a[(i + shift) % n] == b[i]))
}
