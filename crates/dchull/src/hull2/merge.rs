//! Merge two x-separated convex hulls into one.
//!
//! General case: splice the left boundary from its lower to its upper tangent
//! point with the right boundary from its upper to its lower tangent point.
//! Small cases (sizes {2,1}, {1,2}, {2,2}) are assembled explicitly from the
//! tangent endpoints, ordering around a shared apex by slope. Every branch
//! emits clockwise order.

use nalgebra::Vector2;

use super::ring::Hull;
use super::tangent::{calc_tangents, get_slope, Tangents};
use super::types::Color;
use super::view::ViewCtx;

/// Convex hull of `left ∪ right`; `left` must precede `right` in `(x, y)` order.
pub fn merge(left: Hull, right: Hull) -> Hull {
    merge_with(left, right, &mut ViewCtx::none())
}

/// `merge`, reporting tangents (blue) and the merged boundary (green) to `ctx`.
pub fn merge_with(left: Hull, right: Hull, ctx: &mut ViewCtx<'_>) -> Hull {
    let (Some(rightmost), Some(leftmost)) = (left.get_right_most(), right.get_left_most()) else {
        return if left.is_empty() { right } else { left };
    };
    let t = calc_tangents(leftmost, rightmost, &left, &right);
    if ctx.is_active() {
        ctx.blink(&t.lines(&left, &right), Color::Blue);
    }

    let merged = match (left.len(), right.len()) {
        (2, 1) | (1, 2) | (2, 2) => Hull::new(small_boundary(&left, &right, &t)),
        _ => left.hull_merge(t.left_lower, t.left_upper, t.right_upper, t.right_lower, &right),
    };
    if ctx.is_active() {
        ctx.blink(&merged.edges(), Color::Green);
    }
    merged
}

fn small_boundary(left: &Hull, right: &Hull, t: &Tangents) -> Vec<Vector2<f64>> {
    let l_up = left.at(t.left_upper).point;
    let l_low = left.at(t.left_lower).point;
    let r_up = right.at(t.right_upper).point;
    let r_low = right.at(t.right_lower).point;

    if t.left_upper == t.left_lower {
        if t.right_upper == t.right_lower {
            return vec![l_up, r_up];
        }
        around_apex(l_up, r_up, r_low, |apex, far| vec![apex, far], |a, b| vec![a, b, l_up])
    } else if t.right_upper == t.right_lower {
        around_apex(r_up, l_up, l_low, |apex, far| vec![far, apex], |a, b| vec![a, b, r_up])
    } else {
        vec![l_low, l_up, r_up, r_low]
    }
}

/// Order two endpoints around `apex` by their slope from it.
///
/// The endpoint with the larger slope comes first; with equal slopes the three
/// points are collinear and only the farther endpoint is kept.
fn around_apex(
    apex: Vector2<f64>,
    up: Vector2<f64>,
    low: Vector2<f64>,
    collinear: impl FnOnce(Vector2<f64>, Vector2<f64>) -> Vec<Vector2<f64>>,
    triangle: impl FnOnce(Vector2<f64>, Vector2<f64>) -> Vec<Vector2<f64>>,
) -> Vec<Vector2<f64>> {
    let s_up = get_slope(apex, up);
    let s_low = get_slope(apex, low);
    if s_up == s_low {
        let far = if (up - apex).norm_squared() > (low - apex).norm_squared() {
            up
        } else {
            low
        };
        collinear(apex, far)
    } else if s_up > s_low {
        triangle(up, low)
    } else {
        triangle(low, up)
    }
}
