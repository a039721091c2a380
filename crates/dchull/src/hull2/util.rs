use nalgebra::Vector2;
use std::cmp::Ordering;

use super::cfg::CHECK_EPS;

/// Twice the signed area of triangle `(a, b, c)`; negative for a clockwise turn.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// `|cross| <= CHECK_EPS · |ab| · |ac|`: collinear up to relative slack.
#[inline]
fn near_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    cross(a, b, c).abs() <= CHECK_EPS * (b - a).norm() * (c - a).norm()
}

/// Andrew's monotone chain convex hull (returns hull in CCW order, collinear
/// points dropped). Reference for checking the divide-and-conquer solver.
pub fn reference_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// `p` inside or on the clockwise polygon `hull` (degenerate hulls: on the
/// point or segment), with relative slack.
pub fn contains_eps(hull: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    match hull.len() {
        0 => false,
        1 => (p - hull[0]).norm() <= CHECK_EPS * (1.0 + hull[0].norm()),
        2 => on_segment(hull[0], hull[1], p),
        n => (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            cross(a, b, p) <= CHECK_EPS * (b - a).norm() * (p - a).norm()
        }),
    }
}

fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    let ab = b - a;
    let t = (p - a).dot(&ab) / ab.norm_squared();
    near_collinear(a, b, p) && (-CHECK_EPS..=1.0 + CHECK_EPS).contains(&t)
}

/// Every turn has the same rotational sense (collinear turns ignored).
pub fn is_convex(hull: &[Vector2<f64>]) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    let (mut cw, mut ccw) = (false, false);
    for i in 0..n {
        let (a, b, c) = (hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        if near_collinear(a, b, c) {
            continue;
        }
        if cross(a, b, c) < 0.0 {
            cw = true;
        } else {
            ccw = true;
        }
    }
    !(cw && ccw)
}

/// Every turn is strictly clockwise.
pub fn is_clockwise(hull: &[Vector2<f64>]) -> bool {
    let n = hull.len();
    n < 3 || (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) < 0.0)
}

/// No vertex repeats its successor or lies on the segment joining its neighbors.
pub fn is_minimal(hull: &[Vector2<f64>]) -> bool {
    let n = hull.len();
    if n < 2 {
        return true;
    }
    if n == 2 {
        return hull[0] != hull[1];
    }
    (0..n).all(|i| {
        let (a, v, b) = (hull[(i + n - 1) % n], hull[i], hull[(i + 1) % n]);
        v != b && !on_segment(a, b, v)
    })
}

/// `a` and `b` list the same cycle, up to the starting vertex.
pub fn same_cycle(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len()).any(|shift| (0..a.len()).all(|i| a[i] == b[(i + shift) % b.len()]))
}

/// Size, area and perimeter of a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullSummary {
    pub vertices: usize,
    pub area: f64,
    pub perimeter: f64,
}

impl HullSummary {
    pub fn of(hull: &[Vector2<f64>]) -> Self {
        let n = hull.len();
        let mut twice_area = 0.0;
        let mut perimeter = 0.0;
        if n >= 2 {
            for i in 0..n {
                let (a, b) = (hull[i], hull[(i + 1) % n]);
                twice_area += a.x * b.y - a.y * b.x;
                perimeter += (b - a).norm();
            }
        }
        // A two-vertex "polygon" walks its segment twice; report it once.
        if n == 2 {
            perimeter /= 2.0;
        }
        Self {
            vertices: n,
            area: twice_area.abs() / 2.0,
            perimeter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square_cw() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ]
    }

    #[test]
    fn predicates_on_square() {
        let sq = unit_square_cw();
        assert!(is_convex(&sq));
        assert!(is_clockwise(&sq));
        assert!(is_minimal(&sq));
        assert!(contains_eps(&sq, vector![0.5, 0.5]));
        assert!(contains_eps(&sq, vector![1.0, 0.5]));
        assert!(!contains_eps(&sq, vector![1.5, 0.5]));
    }

    #[test]
    fn minimality_flags_collinear_vertex() {
        let mut sq = unit_square_cw();
        sq.insert(1, vector![0.0, 0.5]);
        assert!(is_convex(&sq));
        assert!(!is_minimal(&sq));
        assert!(!is_clockwise(&sq));
    }

    #[test]
    fn reflex_vertex_is_not_convex() {
        let dart = vec![
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![0.5, 1.0],
            vector![2.0, 1.0],
        ];
        assert!(!is_convex(&dart));
    }

    #[test]
    fn degenerate_containment() {
        let seg = vec![vector![0.0, 0.0], vector![2.0, 2.0]];
        assert!(contains_eps(&seg, vector![1.0, 1.0]));
        assert!(!contains_eps(&seg, vector![3.0, 3.0]));
        assert!(!contains_eps(&seg, vector![1.0, 0.0]));
        assert!(contains_eps(&[vector![5.0, 5.0]], vector![5.0, 5.0]));
    }

    #[test]
    fn reference_hull_is_ccw_and_drops_collinear() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![1.0, 1.0],
        ];
        let h = reference_hull(&pts);
        assert_eq!(h.len(), 4);
        let mut rev = h.clone();
        rev.reverse();
        assert!(is_clockwise(&rev));
    }

    #[test]
    fn same_cycle_ignores_start() {
        let sq = unit_square_cw();
        let mut rot = sq.clone();
        rot.rotate_left(3);
        assert!(same_cycle(&sq, &rot));
        let mut rev = sq.clone();
        rev.reverse();
        assert!(!same_cycle(&sq, &rev));
    }

    #[test]
    fn summary_of_square_and_segment() {
        let s = HullSummary::of(&unit_square_cw());
        assert_eq!(s.vertices, 4);
        assert!((s.area - 1.0).abs() < 1e-12);
        assert!((s.perimeter - 4.0).abs() < 1e-12);
        let seg = HullSummary::of(&[vector![0.0, 0.0], vector![3.0, 4.0]]);
        assert!((seg.perimeter - 5.0).abs() < 1e-12);
        assert_eq!(seg.area, 0.0);
    }
}
