pub mod traits;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use dijkstra::Dijkstra;
