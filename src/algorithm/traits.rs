use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Per-vertex vectors are indexed by `identity - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex; `None` if unreachable
    pub distances: Vec<Option<W>>,

    /// Identity of the predecessor of each vertex in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Identities in the order they were finalized, with the distance each
    /// held at that moment
    pub settled: Vec<(usize, W)>,

    /// Source vertex identity
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to `vertex`, or `None` if unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.distances.get(index))
            .copied()
            .flatten()
    }

    /// Identity of the vertex preceding `vertex` on its shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.predecessors.get(index))
            .copied()
            .flatten()
    }

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// Returns `None` if the target is unknown or unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;

        while let Some(previous) = self.predecessor(current) {
            // A predecessor chain never revisits a vertex; bail out on corrupt input
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Some(path)
    }

    /// Number of vertices reachable from the source, including the source itself
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
