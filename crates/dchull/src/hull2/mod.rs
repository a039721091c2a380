//! Divide-and-conquer convex hull in the plane.
//!
//! Purpose
//! - Hull of a 2D point set via recursive halving, tangent search between
//!   sub-hulls, and an explicit splice of their boundaries. O(n log n).
//! - Boundaries are arenas of nodes with integer `prev`/`next` links, local to
//!   each `Hull`; merges build fresh hulls and never touch their inputs.
//!
//! Conventions
//! - Input is sorted by `(x, y)`; exact duplicates are dropped.
//! - Output is clockwise with no collinear vertices. One point yields itself,
//!   a collinear set yields its two extremes.
//! - The algorithm is tolerance-free; `util` predicates carry the only epsilon.
//!
//! Code cross-refs: `Hull`, `calc_tangents`, `merge`, `compute_hull`, `ViewCtx`

mod cfg;
mod merge;
pub mod rand;
mod ring;
mod solver;
mod tangent;
mod types;
pub mod util;
mod view;

pub use merge::{merge, merge_with};
pub use ring::Hull;
#[cfg(feature = "parallel")]
pub use solver::compute_hull_par;
pub use solver::{compute_hull, compute_hull_with_view, convex_hull};
pub use tangent::{calc_lower, calc_tangents, calc_upper, get_slope, Tangents, VERTICAL};
pub use types::{Color, HullError, Node, Segment};
pub use view::{HullView, NoView, RecordingView, ViewCtx, ViewEvent};
