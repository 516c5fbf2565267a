//! Arena storage for candidate paths.
//!
//! Every candidate the search creates is one [`PathNode`]: its last cell, its
//! elapsed time, and a back-link to the node it was extended from.  Branching
//! a path is therefore one push, and siblings share their common prefix
//! without ever aliasing a mutable history.  The full coordinate sequence is
//! rebuilt only for the path that is returned.
//!
//! ```text
//! nodes:  0:(start, 0.0, ─)  1:(a, 12.5, 0)  2:(b, 17.7, 0)  3:(c, 30.1, 1)
//!
//! path(3) = [start, a, c]
//! ```
//!
//! Nodes are never removed; the arena lives for one search.

use sr_core::GridCoord;

use crate::TimedPath;

/// Index of a node in a [`PathArena`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeIdx(u32);

impl NodeIdx {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One candidate path, stored as its last step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathNode {
    pub coord:    GridCoord,
    pub duration: f64,
    pub parent:   Option<NodeIdx>,
}

/// Append-only store of [`PathNode`]s.
#[derive(Debug, Default)]
pub struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the zero-length path at `start`.
    pub fn root(&mut self, start: GridCoord) -> NodeIdx {
        self.push(PathNode { coord: start, duration: 0.0, parent: None })
    }

    /// Add `parent` extended by one leg to `coord` taking `minutes`.
    pub fn extend(&mut self, parent: NodeIdx, coord: GridCoord, minutes: f64) -> NodeIdx {
        let duration = self.nodes[parent.index()].duration + minutes;
        self.push(PathNode { coord, duration, parent: Some(parent) })
    }

    fn push(&mut self, node: PathNode) -> NodeIdx {
        let idx = NodeIdx(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    #[inline]
    pub fn get(&self, idx: NodeIdx) -> &PathNode {
        &self.nodes[idx.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cells of the path ending at `idx`, last cell first.
    pub fn cells(&self, idx: NodeIdx) -> impl Iterator<Item = GridCoord> + '_ {
        let mut cursor = Some(idx);
        std::iter::from_fn(move || {
            let node = self.get(cursor?);
            cursor = node.parent;
            Some(node.coord)
        })
    }

    /// `true` if the path ending at `idx` passes through `coord`.
    pub fn visits(&self, idx: NodeIdx, coord: GridCoord) -> bool {
        self.cells(idx).any(|c| c == coord)
    }

    /// Rebuild the full path ending at `idx`, start first.
    pub fn to_timed_path(&self, idx: NodeIdx) -> TimedPath {
        let mut path: Vec<GridCoord> = self.cells(idx).collect();
        path.reverse();
        TimedPath { duration: self.get(idx).duration, path }
    }
}
