//! Upper and lower tangents between two x-separated convex hulls.
//!
//! Model
//! - `left` precedes `right` in the lexicographic `(x, y)` order of the
//!   solver's sort, so every direction from a left point to a right point lies
//!   in (-90°, +90°]. Slopes are therefore totally ordered, and a vertical pair
//!   always points upward, which is what the `+∞` sentinel encodes.
//! - Both searches start from the facing extremes (`rightmost` of `left`,
//!   `leftmost` of `right`) and rotate the connecting line until neither end
//!   can move. Boundary `next` runs clockwise.
//!
//! Collinear candidates (equal slope) are taken only when they lie farther from
//! the fixed endpoint, so tangent endpoints are the outermost points on the
//! tangent line.

use nalgebra::Vector2;

use super::ring::Hull;
use super::types::{Node, Segment};

/// Slope sentinel for `p.x == q.x`; compares as `+∞`.
pub const VERTICAL: f64 = f64::INFINITY;

/// Slope of the line `p → q`, or `VERTICAL` when both share an x-coordinate.
#[inline]
pub fn get_slope(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    if p.x == q.x {
        return VERTICAL;
    }
    (q.y - p.y) / (q.x - p.x)
}

/// Tangent endpoints as node indices into the hull each belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangents {
    pub left_upper: usize,
    pub right_upper: usize,
    pub left_lower: usize,
    pub right_lower: usize,
}

impl Tangents {
    /// Upper and lower tangent lines, for drawing.
    ///
    /// Panics unless `left` and `right` are the hulls these indices came from.
    pub(crate) fn lines(&self, left: &Hull, right: &Hull) -> [Segment; 2] {
        [
            Segment::new(left.at(self.left_upper).point, right.at(self.right_upper).point),
            Segment::new(left.at(self.left_lower).point, right.at(self.right_lower).point),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Neighbor of the left endpoint to try next.
    #[inline]
    fn step_left(self, n: &Node) -> usize {
        match self {
            Side::Upper => n.prev,
            Side::Lower => n.next,
        }
    }
    #[inline]
    fn step_right(self, n: &Node) -> usize {
        match self {
            Side::Upper => n.next,
            Side::Lower => n.prev,
        }
    }
    /// Moving the left endpoint lowers the slope toward the upper tangent
    /// and raises it toward the lower one.
    #[inline]
    fn left_improves(self, cand: f64, cur: f64) -> bool {
        match self {
            Side::Upper => cand < cur,
            Side::Lower => cand > cur,
        }
    }
    #[inline]
    fn right_improves(self, cand: f64, cur: f64) -> bool {
        match self {
            Side::Upper => cand > cur,
            Side::Lower => cand < cur,
        }
    }
}

#[inline]
fn farther(cand: Vector2<f64>, cur: Vector2<f64>, anchor: Vector2<f64>) -> bool {
    (cand - anchor).norm_squared() > (cur - anchor).norm_squared()
}

/// Alternate left and right moves until a full round changes nothing.
///
/// Terminates: every adopted move strictly increases `(slope progress, |pq|)`
/// lexicographically, and both hulls are finite.
fn rotate(left: &Hull, right: &Hull, mut p: usize, mut q: usize, side: Side) -> (usize, usize) {
    let mut temp = get_slope(left.at(p).point, right.at(q).point);
    let mut done = false;
    while !done {
        done = true;
        loop {
            let cand = side.step_left(left.at(p));
            let (cp, pp, qp) = (left.at(cand).point, left.at(p).point, right.at(q).point);
            let s = get_slope(cp, qp);
            if side.left_improves(s, temp) || (s == temp && farther(cp, pp, qp)) {
                p = cand;
                temp = s;
                done = false;
            } else {
                break;
            }
        }
        loop {
            let cand = side.step_right(right.at(q));
            let (cq, qp, pp) = (right.at(cand).point, right.at(q).point, left.at(p).point);
            let s = get_slope(pp, cq);
            if side.right_improves(s, temp) || (s == temp && farther(cq, qp, pp)) {
                q = cand;
                temp = s;
                done = false;
            } else {
                break;
            }
        }
    }
    (p, q)
}

/// Upper tangent `(p on left, q on right)`: `p` walks `prev`, `q` walks `next`.
pub fn calc_upper(leftmost: &Node, rightmost: &Node, left: &Hull, right: &Hull) -> (usize, usize) {
    rotate(left, right, rightmost.index, leftmost.index, Side::Upper)
}

/// Lower tangent `(p on left, q on right)`: `p` walks `next`, `q` walks `prev`.
pub fn calc_lower(leftmost: &Node, rightmost: &Node, left: &Hull, right: &Hull) -> (usize, usize) {
    rotate(left, right, rightmost.index, leftmost.index, Side::Lower)
}

/// Both tangents, with direct role assignment for a pair facing a single point.
///
/// For sizes (2,1) and (1,2) the pair is split by y (strictly higher is
/// "upper"); the merge step reorders these by slope, so the labels only need
/// to be distinct.
pub fn calc_tangents(leftmost: &Node, rightmost: &Node, left: &Hull, right: &Hull) -> Tangents {
    match (left.len(), right.len()) {
        (2, 1) => {
            let (up, low) = by_height(left);
            Tangents {
                left_upper: up,
                right_upper: 0,
                left_lower: low,
                right_lower: 0,
            }
        }
        (1, 2) => {
            let (up, low) = by_height(right);
            Tangents {
                left_upper: 0,
                right_upper: up,
                left_lower: 0,
                right_lower: low,
            }
        }
        _ => {
            let (left_upper, right_upper) = calc_upper(leftmost, rightmost, left, right);
            let (left_lower, right_lower) = calc_lower(leftmost, rightmost, left, right);
            Tangents {
                left_upper,
                right_upper,
                left_lower,
                right_lower,
            }
        }
    }
}

fn by_height(pair: &Hull) -> (usize, usize) {
    if pair.at(0).y() > pair.at(1).y() {
        (0, 1)
    } else {
        (1, 0)
    }
}
