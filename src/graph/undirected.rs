use crate::graph::traits::{Graph, MutableGraph, Weight};

/// An undirected graph implementation using adjacency vectors
///
/// Every edge `{u, v}` is stored twice, once in the adjacency of each endpoint.
/// A self-loop is stored once.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Adjacency for each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new undirected graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        UndirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph with `vertices` vertices from a list of `(u, v, weight)` edges.
    ///
    /// Returns `None` if an edge names a vertex outside `0..vertices`.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Option<Self> {
        let mut graph = Self::with_vertices(vertices);
        for &(u, v, weight) in edges {
            if !graph.add_edge(u, v, weight) {
                return None;
            }
        }
        Some(graph)
    }

    /// Returns the number of undirected edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns every edge once as `(u, v, weight)` with `u <= v`
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &(v, weight) in neighbors {
                if u <= v {
                    edges.push((u, v, weight));
                }
            }
        }
        edges
    }

    /// Gets the smallest weight among edges between two vertices
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<W> {
        self.adjacency
            .get(u)?
            .iter()
            .filter(|(target, _)| *target == v)
            .map(|(_, weight)| *weight)
            .min()
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: W) -> bool {
        if !self.is_valid_vertex(u) || !self.is_valid_vertex(v) {
            return false;
        }

        self.adjacency[u].push((v, weight));
        if u != v {
            self.adjacency[v].push((u, weight));
        }
        self.edge_count += 1;
        true
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.is_valid_vertex(u) || !self.is_valid_vertex(v) {
            return false;
        }

        let len_before = self.adjacency[u].len();
        self.adjacency[u].retain(|(target, _)| *target != v);
        let removed = len_before - self.adjacency[u].len();
        if u != v {
            self.adjacency[v].retain(|(target, _)| *target != u);
        }
        self.edge_count -= removed;

        removed > 0
    }
}
