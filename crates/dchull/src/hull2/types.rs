//! Basic hull types: boundary nodes, segments, view colors, and errors.
//!
//! - `Node`: a point plus its slot in a circular doubly-linked boundary.
//! - `Segment`: ordered point pair handed to the view.
//! - `HullError`: precondition failures detected at the entry point.

use nalgebra::Vector2;
use std::fmt;

/// Boundary node of a `Hull`.
///
/// Invariants:
/// - `index`, `prev`, `next` are positions in the owning hull's arena and mean
///   nothing outside it.
/// - `next(prev(i)) == i` and `prev(next(i)) == i` within the owning hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub point: Vector2<f64>,
    pub index: usize,
    pub prev: usize,
    pub next: usize,
}

impl Node {
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}

/// Line segment `a → b`; only used to talk to a `HullView`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
}

/// Drawing tags understood by views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// RGB triple, for views that render.
    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
        }
    }
}

/// Errors surfaced by `compute_hull` before any recursion starts.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// No points were given.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "convex hull needs at least one point"),
            HullError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for HullError {}
