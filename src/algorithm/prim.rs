use log::debug;

use crate::algorithm::greedy::{grow_tree, GrowOptions};
use crate::algorithm::{SpanningTree, SpanningTreeAlgorithm};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Prim's minimum spanning tree algorithm
///
/// A vertex's priority is the weight of the cheapest edge connecting it to the
/// finished part of the tree.
#[derive(Debug, Default, Clone)]
pub struct Prim {
    options: GrowOptions,
}

impl Prim {
    /// Creates a new Prim algorithm instance
    pub fn new() -> Self {
        Prim {
            options: GrowOptions::default(),
        }
    }

    /// Return the spanning tree of the start vertex's component on a disconnected
    /// graph instead of failing
    pub fn with_reachable_only(mut self, enabled: bool) -> Self {
        self.options.reachable_only = enabled;
        self
    }
}

impl<W, G> SpanningTreeAlgorithm<W, G> for Prim
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn compute_tree(&self, graph: &G, start: usize) -> Result<SpanningTree<W>> {
        debug!("Prim: {} vertices, start {}", graph.vertex_count(), start);

        let tree = grow_tree(graph, start, self.options, |_, _, _, weight| Ok(weight))?;

        debug!("Prim: {} tree edges", tree.len());
        Ok(tree)
    }
}
