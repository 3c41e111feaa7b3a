//! Greedy Trees - Prim's MST and Dijkstra's shortest-path tree
//!
//! Both algorithms grow a tree from a start vertex by repeatedly finishing the
//! unfinished vertex with the smallest priority. They share one loop, built on an
//! indexed binary min-heap that supports O(log n) priority decreases.
//!
//! The graph itself is an external collaborator, consumed only through the
//! read-only [`Graph`] trait.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, path::all_shortest_paths, prim::Prim, Edge, SpanningTree,
    SpanningTreeAlgorithm,
};
pub use data_structures::{HeapEntry, IndexedMinHeap, Priority};
pub use graph::{Graph, UndirectedGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Graph is disconnected: vertex {0} is unreachable from the start vertex")]
    DisconnectedGraph(usize),

    #[error("Cannot extract from an empty heap")]
    EmptyHeap,

    #[error("ID {0} is not present in the heap")]
    UnknownId(usize),

    #[error("ID {0} is already present in the heap")]
    DuplicateId(usize),

    #[error("Heap capacity {0} exceeded")]
    CapacityExceeded(usize),

    #[error("Vertex {0} is not the target of any tree edge")]
    VertexNotInTree(usize),

    #[error("Tree already holds its maximum of {0} edges")]
    TreeFull(usize),

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Weight arithmetic overflow on edge from {from} to {to}")]
    WeightOverflow { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes a minimum spanning tree of `graph` with Prim's algorithm.
///
/// Returns exactly `vertex_count - 1` edges for a connected graph, each directed
/// from predecessor to child.
pub fn compute_mst<W, G>(graph: &G, start: usize) -> Result<Vec<Edge<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    Prim::new()
        .compute_tree(graph, start)
        .map(SpanningTree::into_edges)
}

/// Computes the shortest-path tree of `graph` rooted at `start` with Dijkstra's
/// algorithm. Each edge carries the shortest distance of its child vertex.
pub fn compute_shortest_path_tree<W, G>(graph: &G, start: usize) -> Result<Vec<Edge<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    Dijkstra::new()
        .compute_tree(graph, start)
        .map(SpanningTree::into_edges)
}

/// Reconstructs the path from `start` to `target` in a shortest-path tree, in
/// traversal order. The path from `start` to itself is empty.
///
/// Each path edge carries the length of its own hop, so the weights sum to the
/// distance of `target`.
pub fn shortest_path<W: Weight>(
    tree: &[Edge<W>],
    target: usize,
    start: usize,
) -> Result<Vec<Edge<W>>> {
    algorithm::path::PathIndex::new(tree).path(target, start)
}
