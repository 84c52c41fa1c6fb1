//! Graph Paths - single-source shortest paths with lazy decrease-key Dijkstra
//!
//! Vertices carry stable 1-based identities inside a fixed-size arena. Edges are
//! directed and carry non-negative weights. The shortest-path engine drives a
//! 1-indexed binary min-heap and resolves stale queue entries at pop time instead
//! of performing an indexed decrease-key.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, PathEntry, Vertex};
pub use graph::degree::DegreeInformation;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {id} (expected a value between 1 and {vertex_count})")]
    InvalidVertex { id: usize, vertex_count: usize },

    #[error("Invalid edge weight: {0} (weights must be finite and non-negative)")]
    InvalidWeight(f64),

    #[error("Priority queue underflow: the queue is empty")]
    Underflow,

    #[error("Invalid set ID: {id} (expected a value below {set_count})")]
    InvalidSet { id: usize, set_count: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
