//! Circular doubly-linked hull boundary over an owned point array.
//!
//! A `Hull` owns its backing points and a node arena indexed by position, so
//! neighbor lookups are O(1) and two hulls never share links. Indices are only
//! meaningful inside the hull that issued them.

use nalgebra::Vector2;

use super::types::{Node, Segment};

/// Convex boundary as an arena of `Node`s with `prev`/`next` indices.
///
/// Invariants:
/// - `points.len() == nodes.len()`; node `i` wraps `points[i]`.
/// - Links form one cycle: `next = (i+1) mod n`, `prev = (i-1) mod n` at
///   construction. A single node links to itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    points: Vec<Vector2<f64>>,
    nodes: Vec<Node>,
}

impl Hull {
    /// Build and link a hull over `points` in the given order.
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        let mut hull = Self {
            points,
            nodes: Vec::new(),
        };
        hull.create();
        hull
    }

    /// Wire the node arena over the backing points. Called once, by `new`.
    fn create(&mut self) {
        let n = self.points.len();
        self.nodes = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &point)| Node {
                point,
                index: i,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Backing points in index order.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
    }

    /// Nodes in index order.
    #[inline]
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    #[inline]
    pub fn get_node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    #[inline]
    pub fn get_next(&self, index: usize) -> Option<&Node> {
        self.nodes.get(self.nodes.get(index)?.next)
    }

    #[inline]
    pub fn get_prev(&self, index: usize) -> Option<&Node> {
        self.nodes.get(self.nodes.get(index)?.prev)
    }

    /// Node with minimum x; ties go to the lower y, then to the lower index.
    ///
    /// Deliberately not plain first occurrence: when equal x-values straddle a
    /// split, only the lexicographic extreme gives a valid start for the
    /// tangent walk.
    ///
    /// Returns `None` only for an empty hull.
    pub fn get_left_most(&self) -> Option<&Node> {
        self.nodes.iter().reduce(|best, node| {
            if (node.x(), node.y()) < (best.x(), best.y()) {
                node
            } else {
                best
            }
        })
    }

    /// Node with maximum x; ties go to the higher y, then to the lower index.
    ///
    /// Returns `None` only for an empty hull.
    pub fn get_right_most(&self) -> Option<&Node> {
        self.nodes.iter().reduce(|best, node| {
            if (node.x(), node.y()) > (best.x(), best.y()) {
                node
            } else {
                best
            }
        })
    }

    /// Node by index for callers that hold indices issued by this hull.
    ///
    /// Panics on a foreign index, like slice indexing.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Splice two boundaries into a fresh hull.
    ///
    /// Walks `next` from `self_start` to `self_end` in `self`, then from
    /// `other_start` to `other_end` in `other`, both inclusive, and links the
    /// concatenation. Walks stop on node index, so repeated coordinates cannot
    /// derail them.
    ///
    /// Panics if an index is outside its hull.
    pub fn hull_merge(
        &self,
        self_start: usize,
        self_end: usize,
        other_start: usize,
        other_end: usize,
        other: &Hull,
    ) -> Hull {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        self.walk_into(self_start, self_end, &mut merged);
        other.walk_into(other_start, other_end, &mut merged);
        Hull::new(merged)
    }

    fn walk_into(&self, start: usize, end: usize, out: &mut Vec<Vector2<f64>>) {
        let end = self.at(end).index;
        let mut cur = self.at(start);
        // Links are private and form one cycle, so `end` is met within a lap.
        loop {
            out.push(cur.point);
            if cur.index == end {
                return;
            }
            cur = self.at(cur.next);
        }
    }

    /// Closed boundary as segments `i → i+1 mod n`. Empty for fewer than two nodes.
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }
}
