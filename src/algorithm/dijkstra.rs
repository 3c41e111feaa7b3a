use log::debug;

use crate::algorithm::greedy::{grow_tree, GrowOptions};
use crate::algorithm::{SpanningTree, SpanningTreeAlgorithm};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm producing a shortest-path tree
///
/// A vertex's priority is its tentative distance from the start vertex. Each
/// tree edge carries the distance of its child, the priority it was finished
/// with; [`PathIndex`](crate::algorithm::path::PathIndex) turns these back into
/// per-hop weights.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    options: GrowOptions,
    /// Whether to reject negative edge weights met during relaxation
    reject_negative: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            options: GrowOptions::default(),
            reject_negative: true,
        }
    }

    /// Return the tree of the start vertex's component on a disconnected graph
    /// instead of failing
    pub fn with_reachable_only(mut self, enabled: bool) -> Self {
        self.options.reachable_only = enabled;
        self
    }

    /// Enable or disable the negative edge weight check
    pub fn with_negative_weight_check(mut self, enabled: bool) -> Self {
        self.reject_negative = enabled;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> SpanningTreeAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_tree(&self, graph: &G, start: usize) -> Result<SpanningTree<W>> {
        debug!("Dijkstra: {} vertices, start {}", graph.vertex_count(), start);

        let tree = grow_tree(graph, start, self.options, |u, v, dist_u, weight| {
            if self.reject_negative && weight < W::zero() {
                return Err(Error::NegativeWeight { from: u, to: v });
            }
            dist_u
                .checked_sum(weight)
                .ok_or(Error::WeightOverflow { from: u, to: v })
        })?;

        debug!("Dijkstra: {} tree edges", tree.len());
        Ok(tree)
    }
}
