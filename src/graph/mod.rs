pub mod traits;
pub mod directed;
pub mod degree;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use degree::DegreeInformation;
