//! Flat re-exports of the hull surface.

pub use crate::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
pub use crate::hull2::util::{
    contains_eps, is_clockwise, is_convex, is_minimal, reference_hull, same_cycle, HullSummary,
};
#[cfg(feature = "parallel")]
pub use crate::hull2::compute_hull_par;
pub use crate::hull2::{
    calc_lower, calc_tangents, calc_upper, compute_hull, compute_hull_with_view, convex_hull,
    get_slope, merge, merge_with, Color, Hull, HullError, HullView, Node, NoView, RecordingView,
    Segment, Tangents, ViewCtx, ViewEvent, VERTICAL,
};
