//! Divide-and-conquer driver: sort, split at the index midpoint, merge bottom-up.
//!
//! Input preparation is the only place preconditions are checked. Recursion
//! assumes a sorted, duplicate-free, finite point sequence.

use nalgebra::Vector2;
use std::cmp::Ordering;

use super::merge::merge_with;
use super::ring::Hull;
use super::types::{Color, HullError};
use super::view::ViewCtx;

/// Recursive step. Hulls with fewer than three points are returned as-is.
pub fn convex_hull(hull: Hull, ctx: &mut ViewCtx<'_>) -> Hull {
    if hull.len() < 3 {
        return hull;
    }
    let (left, right) = split(hull);
    let left = convex_hull(left, ctx);
    let right = convex_hull(right, ctx);
    merge_with(left, right, ctx)
}

fn split(hull: Hull) -> (Hull, Hull) {
    let half = hull.len() / 2;
    let mut left = hull.into_points();
    let right = left.split_off(half);
    (Hull::new(left), Hull::new(right))
}

/// Convex hull of `points` as a clockwise closed polygon.
///
/// One point yields itself; two distinct points (or any collinear set) yield the
/// two extremes. Exact duplicates are ignored.
pub fn compute_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    compute_hull_with_view(points, &mut ViewCtx::none())
}

/// `compute_hull`, reporting every merge to `ctx` and drawing the result in red.
pub fn compute_hull_with_view(
    points: &[Vector2<f64>],
    ctx: &mut ViewCtx<'_>,
) -> Result<Vec<Vector2<f64>>, HullError> {
    let leaf = Hull::new(prepare(points)?);
    let hull = convex_hull(leaf, ctx);
    ctx.show(&hull.edges(), Color::Red);
    Ok(hull.into_points())
}

/// Validate, sort by `(x, y)` (stable), and drop exact duplicates.
pub(crate) fn prepare(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    Ok(pts)
}

/// `compute_hull` with the two halves of large subproblems solved in parallel.
///
/// Halves never alias, so the result is identical to the sequential solver.
#[cfg(feature = "parallel")]
pub fn compute_hull_par(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    Ok(par_hull(Hull::new(prepare(points)?)).into_points())
}

#[cfg(feature = "parallel")]
fn par_hull(hull: Hull) -> Hull {
    if hull.len() <= super::cfg::PAR_MIN_LEN {
        return convex_hull(hull, &mut ViewCtx::none());
    }
    let (left, right) = split(hull);
    let (left, right) = rayon::join(|| par_hull(left), || par_hull(right));
    super::merge::merge(left, right)
}
