use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted directed graph whose vertices are identified
/// by the contiguous range `1..=vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns the number of outgoing edges from a vertex
    fn out_degree(&self, vertex: usize) -> usize {
        self.outgoing_edges(vertex).count()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Returns `Ok(false)` without changing the graph for self-loops and for
    /// edges that already exist.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool>;
}
