use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::binary_heap::{BinaryHeap, DEFAULT_CAPACITY};
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy decrease-key.
///
/// Improved vertices are re-inserted into the queue instead of having their
/// existing entry moved. Entries for vertices that were finalized in the
/// meantime are discarded when popped.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Initial capacity of the per-run priority queue
    queue_capacity: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            queue_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the initial capacity of the priority queue
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex {
                id: source,
                vertex_count: n,
            });
        }

        // Every vertex starts unvisited at infinite distance
        let mut known = vec![false; n];
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = Vec::with_capacity(n);

        distances[source - 1] = W::zero();

        // Ordered by (distance, identity); a vertex may appear more than once
        let mut queue = BinaryHeap::with_capacity(self.queue_capacity);
        queue.insert((W::zero(), source));

        let mut stale = 0usize;

        while let Some((dist_u, u)) = queue.pop() {
            let u_index = u - 1;

            // Superseded by an earlier, smaller entry for the same vertex
            if known[u_index] {
                stale += 1;
                continue;
            }

            known[u_index] = true;
            settled.push((u, dist_u));
            trace!("finalized vertex {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                let v_index = v - 1;
                if known[v_index] {
                    continue;
                }

                let candidate = dist_u + weight;
                if candidate < distances[v_index] {
                    distances[v_index] = candidate;
                    predecessors[v_index] = Some(u);
                    queue.insert((candidate, v));
                }
            }
        }

        debug!(
            "dijkstra from {}: {} of {} vertices reachable, {} stale queue entries discarded",
            source,
            settled.len(),
            n,
            stale
        );

        let distances = known
            .iter()
            .zip(distances)
            .map(|(&is_known, distance)| is_known.then_some(distance))
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            settled,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};
    use ordered_float::OrderedFloat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn weight(w: f64) -> OrderedFloat<f64> {
        OrderedFloat(w)
    }

    #[test]
    fn test_prefers_cheaper_two_hop_path() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(1, 2, weight(1.0)).unwrap();
        graph.add_edge(2, 3, weight(2.0)).unwrap();
        graph.add_edge(1, 3, weight(4.0)).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();

        assert_eq!(result.distance(1), Some(weight(0.0)));
        assert_eq!(result.distance(2), Some(weight(1.0)));
        assert_eq!(result.distance(3), Some(weight(3.0)));
        assert_eq!(result.predecessor(3), Some(2));
        assert_eq!(result.predecessor(1), None);
        let order: Vec<usize> = result.settled.iter().map(|&(v, _)| v).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_source() {
        let graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new(2);
        let dijkstra = Dijkstra::new();

        assert!(matches!(
            dijkstra.compute_shortest_paths(&graph, 0),
            Err(Error::InvalidVertex { id: 0, vertex_count: 2 })
        ));
        assert!(dijkstra.compute_shortest_paths(&graph, 3).is_err());
    }

    #[test]
    fn test_tiny_queue_capacity_still_works() {
        let mut graph = DirectedGraph::new(5);
        for from in 1..=5 {
            for to in 1..=5 {
                let _ = graph.add_edge(from, to, weight((from * to) as f64));
            }
        }

        let result = Dijkstra::new()
            .with_queue_capacity(0)
            .compute_shortest_paths(&graph, 5)
            .unwrap();

        assert_eq!(result.reachable_count(), 5);
        assert_eq!(result.distance(1), Some(weight(5.0)));
        assert_eq!(result.distance(2), Some(weight(7.0)));
    }

    #[test]
    fn test_finalized_distances_never_change() {
        let mut rng = StdRng::seed_from_u64(42);
        let dijkstra = Dijkstra::new();

        for _ in 0..20 {
            let n = rng.gen_range(2..=40);
            let mut graph = DirectedGraph::new(n);
            for _ in 0..n * 4 {
                let from = rng.gen_range(1..=n);
                let to = rng.gen_range(1..=n);
                // Small integer weights give plenty of ties and re-insertions
                let _ = graph.add_edge(from, to, weight(rng.gen_range(0..5u32) as f64));
            }

            let result = dijkstra.compute_shortest_paths(&graph, 1).unwrap();

            assert_eq!(result.settled.len(), result.reachable_count());
            let mut seen = vec![false; n];
            for &(vertex, at_finalization) in &result.settled {
                assert!(!seen[vertex - 1], "vertex {} finalized twice", vertex);
                seen[vertex - 1] = true;
                assert_eq!(result.distance(vertex), Some(at_finalization));
            }
        }
    }

    #[test]
    fn test_name() {
        type W = OrderedFloat<f64>;
        let name =
            <Dijkstra as ShortestPathAlgorithm<W, DirectedGraph<W>>>::name(&Dijkstra::new());
        assert_eq!(name, "Dijkstra");
    }
}
