use std::env;
use std::time::{Duration, Instant};

use greedy_trees::graph::generators::generate_random_connected;
use greedy_trees::graph::{Graph, UndirectedGraph};
use greedy_trees::{all_shortest_paths, Dijkstra, Prim, SpanningTreeAlgorithm};
use log::info;
use rayon::prelude::*;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &UndirectedGraph<u64>, source: usize) -> Duration
where
    A: SpanningTreeAlgorithm<u64, UndirectedGraph<u64>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let tree = match algorithm.compute_tree(graph, source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    let farthest = tree.finish_priorities.iter().flatten().max();
    println!(
        "  - {} tree edges, largest priority {:?} in {:?}",
        tree.len(),
        farthest,
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Optional positional arguments: edge factor, then graph sizes
    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2.0);
    let mut graph_sizes: Vec<usize> = args.iter().skip(2).filter_map(|s| s.parse().ok()).collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    }

    println!("=====================================================");
    println!("Benchmark: Prim vs Dijkstra");
    println!("Edge factor: {} extra edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let prim = Prim::new();
    let dijkstra = Dijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random connected graph with {} vertices...", size);
        let extra_edges = (edge_factor * size as f64) as usize;
        let graph = generate_random_connected(size, extra_edges, 100, size as u64);
        info!("graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let prim_time = benchmark_algorithm("Prim", &prim, &graph, 0);
        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0);

        // Independent runs from several start vertices, each owning its own records
        let starts: Vec<usize> = (0..size).step_by((size / 8).max(1)).collect();
        let parallel_start = Instant::now();
        let path_counts: Vec<usize> = starts
            .par_iter()
            .filter_map(|&source| {
                let tree = dijkstra.compute_tree(&graph, source).ok()?;
                let paths = all_shortest_paths(&tree.edges, size, source).ok()?;
                Some(paths.iter().map(Vec::len).sum())
            })
            .collect();
        let parallel_time = parallel_start.elapsed();
        println!(
            "  - {} parallel Dijkstra runs with all paths in {:?} ({} path edges)",
            path_counts.len(),
            parallel_time,
            path_counts.iter().sum::<usize>()
        );

        results.push((size, prim_time, dijkstra_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<15} | {:<15}", "Vertices", "Prim (ms)", "Dijkstra (ms)", "Parallel (ms)");
    println!("-----------------------------------------------------");

    for (size, prim_time, dijkstra_time, parallel_time) in &results {
        println!(
            "{:<10} | {:<12} | {:<15} | {:<15}",
            size,
            prim_time.as_millis(),
            dijkstra_time.as_millis(),
            parallel_time.as_millis()
        );
    }
}
