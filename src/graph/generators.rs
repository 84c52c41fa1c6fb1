use crate::data_structures::DisjointSets;
use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use log::debug;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Weight given to every edge of a random connectivity graph
pub const CONNECTIVITY_EDGE_WEIGHT: f64 = 1.0;

/// Generates a random graph on `n` vertices that is just connected enough.
///
/// Pairs of distinct vertices are drawn uniformly at random and joined in both
/// directions until a single connected component remains. The result tends to
/// be far sparser than a complete graph.
pub fn generate_random_connected<R>(
    n: usize,
    rng: &mut R,
) -> Result<DirectedGraph<OrderedFloat<f64>>>
where
    R: Rng + ?Sized,
{
    let mut graph = DirectedGraph::new(n);
    let mut components = DisjointSets::new(n);
    let mut draws = 0usize;

    while components.set_count() > 1 {
        let origin = rng.gen_range(1..=n);
        let target = rng.gen_range(1..=n);
        draws += 1;

        if origin == target {
            continue;
        }

        let weight = OrderedFloat(CONNECTIVITY_EDGE_WEIGHT);
        graph.add_edge(origin, target, weight)?;
        graph.add_edge(target, origin, weight)?;

        components.union(origin - 1, target - 1)?;
    }

    debug!("connected {} vertices after {} random draws", n, draws);

    Ok(graph)
}

/// Same as [`generate_random_connected`] with a seeded generator
pub fn generate_random_connected_seeded(
    n: usize,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_connected(n, &mut rng)
}
