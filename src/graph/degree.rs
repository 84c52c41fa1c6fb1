use num_traits::{Float, Zero};
use serde::Serialize;
use std::fmt::Debug;

use crate::graph::traits::Graph;

/// Out-degree statistics of a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeInformation {
    /// Number of vertices the statistics cover
    pub vertex_count: usize,

    /// Sum of all out-degrees, which is also the number of directed edges
    pub out_degree_sum: usize,

    /// Number of unordered vertex pairs joined by an edge in at least one direction
    pub undirected_edge_count: usize,

    /// Smallest out-degree of any vertex
    pub smallest_out_degree: usize,

    /// Largest out-degree of any vertex
    pub largest_out_degree: usize,

    /// Exact mean out-degree
    pub average_out_degree: f64,
}

/// Computes degree statistics for a graph, or `None` if it has no vertices
pub fn degree_information<W, G>(graph: &G) -> Option<DegreeInformation>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return None;
    }

    let mut out_degree_sum = 0;
    let mut smallest_out_degree = usize::MAX;
    let mut largest_out_degree = 0;
    let mut undirected_edge_count = 0;

    for vertex in 1..=vertex_count {
        let degree = graph.out_degree(vertex);
        out_degree_sum += degree;
        smallest_out_degree = smallest_out_degree.min(degree);
        largest_out_degree = largest_out_degree.max(degree);

        // Count each pair once: from its smaller end, or from the larger end
        // when no reverse edge exists
        undirected_edge_count += graph
            .outgoing_edges(vertex)
            .filter(|&(target, _)| vertex < target || !graph.has_edge(target, vertex))
            .count();
    }

    Some(DegreeInformation {
        vertex_count,
        out_degree_sum,
        undirected_edge_count,
        smallest_out_degree,
        largest_out_degree,
        average_out_degree: out_degree_sum as f64 / vertex_count as f64,
    })
}
