use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// A tree edge, directed from predecessor to child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Result of a greedy tree-growing algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W>
where
    W: Weight,
{
    /// Vertex the tree was grown from
    pub root: usize,

    /// Tree edges in the order their child vertex was finished, each weighted with
    /// the child's priority at that moment
    pub edges: Vec<Edge<W>>,

    /// Priority each vertex had when it was finished, `None` if never finished.
    /// For Dijkstra this is the shortest distance, for Prim the connecting edge weight.
    pub finish_priorities: Vec<Option<W>>,
}

impl<W> SpanningTree<W>
where
    W: Weight,
{
    /// Returns the number of tree edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all tree edge weights, the tree's cost for a minimum spanning tree
    ///
    /// Fails with `WeightOverflow` on the first edge whose weight no longer fits.
    pub fn total_weight(&self) -> Result<W> {
        self.edges.iter().try_fold(W::zero(), |total, edge| {
            total.checked_sum(edge.weight).ok_or(Error::WeightOverflow {
                from: edge.from,
                to: edge.to,
            })
        })
    }

    /// Priority of `vertex` at the time it was finished
    pub fn distance_to(&self, vertex: usize) -> Option<W> {
        self.finish_priorities.get(vertex).copied().flatten()
    }

    /// Consumes the tree and returns its edges
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

/// Trait for algorithms that grow a spanning tree from a start vertex
pub trait SpanningTreeAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute the tree of `graph` rooted at `start`
    fn compute_tree(&self, graph: &G, start: usize) -> Result<SpanningTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
