//! Path reconstruction over a shortest-path tree.
//!
//! Tree edges produced by Dijkstra carry the distance of their child vertex.
//! Reconstructed paths carry per-hop weights instead, `dist(to) - dist(from)`,
//! so the weights of a path from `start` to `v` sum to the distance of `v`.

use std::collections::HashMap;

use crate::algorithm::Edge;
use crate::graph::Weight;
use crate::{Error, Result};

/// Index from each child vertex to the tree edge that reaches it
///
/// Built once in O(V), after which each path walk costs O(depth) instead of a
/// linear scan of the tree per step.
#[derive(Debug, Clone)]
pub struct PathIndex<W> {
    /// The tree edge whose `to` is the key
    parent_edge: HashMap<usize, Edge<W>>,

    edge_count: usize,
}

impl<W> PathIndex<W>
where
    W: Weight,
{
    /// Indexes `tree`. If a vertex is the target of several edges the first one wins.
    pub fn new(tree: &[Edge<W>]) -> Self {
        let mut parent_edge = HashMap::with_capacity(tree.len());
        for edge in tree {
            parent_edge.entry(edge.to).or_insert(*edge);
        }

        PathIndex {
            parent_edge,
            edge_count: tree.len(),
        }
    }

    /// Returns the tree edge leading into `vertex`
    pub fn parent_edge(&self, vertex: usize) -> Option<Edge<W>> {
        self.parent_edge.get(&vertex).copied()
    }

    /// Tree edges from `target` back to `start`, as stored in the tree
    fn chain(&self, target: usize, start: usize) -> Result<Vec<Edge<W>>> {
        let mut chain = Vec::new();
        let mut current = target;

        while current != start {
            // A consistent tree never needs more steps than it has edges
            if chain.len() == self.edge_count {
                return Err(Error::VertexNotInTree(current));
            }
            let edge = self
                .parent_edge(current)
                .ok_or(Error::VertexNotInTree(current))?;
            chain.push(edge);
            current = edge.from;
        }

        Ok(chain)
    }

    /// Returns the edges from `start` to `target` in traversal order, each
    /// weighted with the length of that single hop
    ///
    /// The path from `start` to itself is empty. Fails with `VertexNotInTree` if
    /// the chain of parent edges breaks off, or loops, before reaching `start`.
    /// The tree does not know the graph's vertex count, so a target outside the
    /// graph is reported as `VertexNotInTree` too rather than `InvalidVertex`.
    pub fn path(&self, target: usize, start: usize) -> Result<Vec<Edge<W>>> {
        let chain = self.chain(target, start)?;

        let mut path = Vec::with_capacity(chain.len());
        for (i, edge) in chain.iter().enumerate() {
            let parent_distance = chain.get(i + 1).map_or(W::zero(), |parent| parent.weight);
            let hop = edge
                .weight
                .checked_difference(parent_distance)
                .ok_or(Error::WeightOverflow {
                    from: edge.from,
                    to: edge.to,
                })?;
            path.push(Edge::new(edge.from, edge.to, hop));
        }

        path.reverse();
        Ok(path)
    }

    /// Distance from `start` to `target`, read off the edge leading into `target`
    /// once the chain back to `start` has been checked
    pub fn distance(&self, target: usize, start: usize) -> Result<W> {
        let chain = self.chain(target, start)?;
        Ok(chain.first().map_or(W::zero(), |edge| edge.weight))
    }
}

/// Returns the path from `start` to every vertex of a shortest-path tree over
/// `vertex_count` vertices; `paths[v]` ends at `v` and `paths[start]` is empty.
///
/// The tree is indexed once and shared by all walks.
pub fn all_shortest_paths<W: Weight>(
    tree: &[Edge<W>],
    vertex_count: usize,
    start: usize,
) -> Result<Vec<Vec<Edge<W>>>> {
    if start >= vertex_count {
        return Err(Error::InvalidVertex(start));
    }
    // Dijkstra finishes a neighbour of the start vertex first
    if let Some(first) = tree.first() {
        if first.from != start {
            return Err(Error::InvalidVertex(start));
        }
    }

    let index = PathIndex::new(tree);
    (0..vertex_count)
        .map(|vertex| index.path(vertex, start))
        .collect()
}
