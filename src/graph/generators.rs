use crate::graph::{MutableGraph, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a connected random graph with n vertices
///
/// A random spanning tree guarantees connectivity, then `extra_edges` further
/// edges are added between random vertex pairs. Weights are drawn from
/// `1..=max_weight`. The same seed always yields the same graph.
pub fn generate_random_connected(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    seed: u64,
) -> UndirectedGraph<u64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = UndirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    // Attach each vertex to a random earlier one
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(u, v, weight);
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                let weight = rng.gen_range(1..=max_weight);
                graph.add_edge(u, v, weight);
            }
        }
    }

    graph
}

/// Generates a 2D grid graph with dimensions width*height and 4-connectivity
pub fn generate_grid(width: usize, height: usize, weight: u64) -> UndirectedGraph<u64> {
    let mut graph = UndirectedGraph::with_vertices(width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    // Each edge once: only towards the right and downwards
    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), weight);
            }
        }
    }

    graph
}

/// Generates a complete graph on n vertices with random weights in `1..=max_weight`
pub fn generate_complete(n: usize, max_weight: u64, seed: u64) -> UndirectedGraph<u64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = UndirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
///
/// The result is not guaranteed to be connected.
pub fn generate_geometric_2d(n: usize, r: f64, seed: u64) -> UndirectedGraph<OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    // One vertex per point, ids in generation order
    let mut points: Vec<(f64, f64)> = Vec::with_capacity(n);
    for _ in 0..n {
        let id = graph.add_vertex();
        debug_assert_eq!(id, points.len());
        points.push((rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];

            let dx = x1 - x2;
            let dy = y1 - y2;
            let dist = f64::sqrt(dx * dx + dy * dy);

            if dist <= r {
                // Edge weight equals the Euclidean distance
                graph.add_edge(i, j, OrderedFloat(dist));
            }
        }
    }

    graph
}
