//! Console rendering for path tables, edge queries and degree statistics.

use num_traits::{Float, Zero};
use serde::Serialize;
use std::fmt::{self, Debug, Display};

use crate::graph::{DegreeInformation, DirectedGraph};
use crate::PathEntry;
use crate::Result;

/// Renders one path row as `id: a, b, c, Cost: d`.
///
/// Costs use one decimal place; an unreachable vertex costs `inf`.
pub fn format_path_entry<W>(entry: &PathEntry<W>) -> String
where
    W: Float + Zero + Debug + Copy,
{
    let path = entry
        .path
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let cost = entry
        .distance
        .unwrap_or_else(W::infinity)
        .to_f64()
        .unwrap_or(f64::INFINITY);

    format!("{}: {}, Cost: {:.1}", entry.vertex, path, cost)
}

/// Renders a full path table, one row per line
pub fn format_paths<W>(entries: &[PathEntry<W>]) -> String
where
    W: Float + Zero + Debug + Copy,
{
    entries
        .iter()
        .map(format_path_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// What an edge query found
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "weight", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Origin and target are the same vertex, an implicit zero-cost connection
    SameVertex,
    /// A direct edge exists with this weight
    Connected(f64),
    NotConnected,
}

/// The answer to one `origin target` edge query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryReport {
    pub origin: usize,
    pub target: usize,
    pub outcome: QueryOutcome,
}

impl QueryReport {
    /// Looks up the direct edge between two vertices
    pub fn evaluate<W>(graph: &DirectedGraph<W>, origin: usize, target: usize) -> Result<Self>
    where
        W: Float + Zero + Debug + Copy,
    {
        let weight = graph.is_connected(origin, target)?;

        let outcome = if origin == target {
            QueryOutcome::SameVertex
        } else {
            match weight.and_then(|w| w.to_f64()) {
                Some(w) => QueryOutcome::Connected(w),
                None => QueryOutcome::NotConnected,
            }
        };

        Ok(QueryReport {
            origin,
            target,
            outcome,
        })
    }
}

impl Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.origin, self.target)?;
        match self.outcome {
            QueryOutcome::SameVertex => write!(f, "Same vertex - implicit weight of 0"),
            QueryOutcome::Connected(weight) => write!(f, "Connected, weight of edge is {}", weight),
            QueryOutcome::NotConnected => write!(f, "Not connected"),
        }
    }
}

/// Renders degree statistics, or `Graph is empty.` when there are none
pub fn format_degree_information(info: Option<&DegreeInformation>) -> String {
    match info {
        None => "Graph is empty.".to_string(),
        Some(info) => format!(
            "Number of Edges: {}\n\
             Number of Undirected Edges: {}\n\
             Smallest Degree: {}\n\
             Largest Degree: {}\n\
             Average Degree: {:.1}",
            info.out_degree_sum,
            info.undirected_edge_count,
            info.smallest_out_degree,
            info.largest_out_degree,
            info.average_out_degree,
        ),
    }
}
