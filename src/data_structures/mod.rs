pub mod binary_heap;
pub mod disjoint_sets;

pub use binary_heap::BinaryHeap;
pub use disjoint_sets::DisjointSets;
