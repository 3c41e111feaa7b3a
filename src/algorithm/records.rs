use log::trace;

use crate::algorithm::{Edge, SpanningTree};
use crate::data_structures::{HeapEntry, IndexedMinHeap, Priority};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Per-run state of a greedy tree-growing algorithm
///
/// Owned exclusively by one algorithm call and consumed by [`into_tree`](Self::into_tree).
#[derive(Debug)]
pub struct AlgorithmRecords<W>
where
    W: Weight,
{
    /// Vertex the tree is grown from
    start: usize,

    /// Priority queue holding every unfinished vertex
    heap: IndexedMinHeap<Priority<W>>,

    /// finished[v] is true iff v has been extracted and finished
    finished: Vec<bool>,

    /// Priority of each vertex at the time it was finished
    finish_priorities: Vec<Option<W>>,

    /// The neighbour that last lowered each vertex's priority
    predecessors: Vec<Option<usize>>,

    /// Tree edges in finishing order, at most `vertex_count - 1`
    tree_edges: Vec<Edge<W>>,
}

impl<W> AlgorithmRecords<W>
where
    W: Weight,
{
    /// Creates the records for a run over `graph` starting from `start`
    ///
    /// Every vertex is seeded into the heap in id order: `start` with priority
    /// zero, all others with infinite priority.
    pub fn new<G: Graph<W>>(graph: &G, start: usize) -> Result<Self> {
        if !graph.is_valid_vertex(start) {
            return Err(Error::InvalidVertex(start));
        }

        let n = graph.vertex_count();
        let mut heap = IndexedMinHeap::new(n);
        for v in 0..n {
            let priority = if v == start {
                Priority::Finite(W::zero())
            } else {
                Priority::Infinite
            };
            heap.insert(priority, v)?;
        }

        Ok(AlgorithmRecords {
            start,
            heap,
            finished: vec![false; n],
            finish_priorities: vec![None; n],
            predecessors: vec![None; n],
            tree_edges: Vec::with_capacity(n.saturating_sub(1)),
        })
    }

    /// Returns true while unfinished vertices remain in the queue
    pub fn has_pending(&self) -> bool {
        !self.heap.is_empty()
    }

    /// Removes the unfinished vertex with the smallest priority from the queue
    pub fn extract_min(&mut self) -> Result<HeapEntry<Priority<W>>> {
        self.heap.extract_min()
    }

    /// Marks `vertex` finished with its final priority
    pub fn finish(&mut self, vertex: usize, priority: W) {
        debug_assert!(!self.finished[vertex], "vertex {} finished twice", vertex);
        self.finished[vertex] = true;
        self.finish_priorities[vertex] = Some(priority);
    }

    pub fn is_finished(&self, vertex: usize) -> bool {
        self.finished.get(vertex).copied().unwrap_or(false)
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Current queue priority of `vertex`, `None` once it is finished
    pub fn current_priority(&self, vertex: usize) -> Option<Priority<W>> {
        self.heap.peek_priority(vertex)
    }

    /// Offers `candidate` as a new priority for `vertex`, reached from `from`.
    ///
    /// The predecessor changes only if the priority actually decreases.
    pub fn relax(&mut self, vertex: usize, from: usize, candidate: W) -> Result<bool> {
        let decreased = self
            .heap
            .decrease_priority(vertex, Priority::Finite(candidate))?;
        if decreased {
            trace!("relaxed {} via {} to {:?}", vertex, from, candidate);
            self.predecessors[vertex] = Some(from);
        }
        Ok(decreased)
    }

    /// Appends a tree edge, weighted with the child's priority at finish time
    pub fn record_tree_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let max_edges = self.finished.len().saturating_sub(1);
        if self.tree_edges.len() >= max_edges {
            return Err(Error::TreeFull(max_edges));
        }
        self.tree_edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    pub fn tree_edges(&self) -> &[Edge<W>] {
        &self.tree_edges
    }

    /// Consumes the records and returns the accumulated tree
    pub fn into_tree(self) -> SpanningTree<W> {
        SpanningTree {
            root: self.start,
            edges: self.tree_edges,
            finish_priorities: self.finish_priorities,
        }
    }
}
