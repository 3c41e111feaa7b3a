//! The loop shared by Prim's and Dijkstra's algorithms.
//!
//! Both repeatedly finish the unfinished vertex with the smallest priority, record
//! the edge that reached it and offer new priorities to its unfinished
//! neighbours. They differ only in how a neighbour's candidate priority is
//! derived, which is passed in as a closure.

use log::{debug, trace, warn};

use crate::algorithm::records::AlgorithmRecords;
use crate::algorithm::SpanningTree;
use crate::data_structures::{HeapEntry, Priority};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Options shared by both greedy algorithms
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowOptions {
    /// Stop at the first unreachable vertex and return the start component's tree
    /// instead of failing with `DisconnectedGraph`
    pub reachable_only: bool,
}

/// Grows a tree over `graph` from `start`.
///
/// `candidate(u, v, priority_u, weight)` returns the priority `v` would get when
/// reached from the just-finished vertex `u` over an edge of `weight`.
pub fn grow_tree<W, G, F>(
    graph: &G,
    start: usize,
    options: GrowOptions,
    candidate: F,
) -> Result<SpanningTree<W>>
where
    W: Weight,
    G: Graph<W>,
    F: Fn(usize, usize, W, W) -> Result<W>,
{
    let mut records = AlgorithmRecords::new(graph, start)?;

    while records.has_pending() {
        let HeapEntry { priority, id: u } = records.extract_min()?;

        let priority = match priority {
            Priority::Finite(priority) => priority,
            Priority::Infinite if options.reachable_only => {
                debug!("vertex {} unreachable from {}, stopping at component boundary", u, start);
                break;
            }
            Priority::Infinite => {
                warn!("vertex {} is unreachable from start vertex {}", u, start);
                return Err(Error::DisconnectedGraph(u));
            }
        };

        records.finish(u, priority);
        trace!("finished {} at priority {:?}", u, priority);

        // The edge carries the extracted priority: the connecting edge weight for
        // Prim, the distance from `start` for Dijkstra
        if u != start {
            let parent = records.predecessor(u).ok_or(Error::DisconnectedGraph(u))?;
            records.record_tree_edge(parent, u, priority)?;
        }

        for (v, weight) in graph.neighbors(u) {
            if !graph.is_valid_vertex(v) {
                return Err(Error::InvalidVertex(v));
            }
            if records.is_finished(v) {
                continue;
            }

            let offered = candidate(u, v, priority, weight)?;
            let improves = records
                .current_priority(v)
                .map_or(false, |current| Priority::Finite(offered) < current);
            if improves {
                records.relax(v, u, offered)?;
            }
        }
    }

    Ok(records.into_tree())
}
