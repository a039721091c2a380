//! Planar convex hulls by divide and conquer.
//!
//! API Policy
//! - `hull2` holds the algorithm; `api` is a flat re-export for callers that do
//!   not care about module layout. There is no stability promise beyond that.

pub mod api;
pub mod hull2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull2::{compute_hull, Hull, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull2::util::{reference_hull, HullSummary};
    pub use crate::hull2::{
        compute_hull, compute_hull_with_view, Color, Hull, HullError, HullView, Segment, ViewCtx,
    };
    pub use nalgebra::Vector2 as Vec2;
}
