pub mod traits;
pub mod records;
pub mod greedy;
pub mod prim;
pub mod dijkstra;
pub mod path;

pub use traits::{Edge, SpanningTree, SpanningTreeAlgorithm};
