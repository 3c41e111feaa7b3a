use greedy_trees::algorithm::path::PathIndex;
use greedy_trees::graph::generators::generate_grid;
use greedy_trees::graph::{MutableGraph, UndirectedGraph};
use greedy_trees::{all_shortest_paths, shortest_path, Dijkstra, Edge, Error, SpanningTreeAlgorithm};

// Test helper function to check that a path is a connected walk from source to target
fn assert_walk(graph: &UndirectedGraph<u64>, path: &[Edge<u64>], source: usize, target: usize) {
    assert_eq!(path[0].from, source, "Path should start at source");
    assert_eq!(path[path.len() - 1].to, target, "Path should end at target");

    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "Path edges should be contiguous");
    }
    for edge in path {
        assert_eq!(
            graph.edge_weight(edge.from, edge.to),
            Some(edge.weight),
            "Path should only use existing edges"
        );
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10, 1);

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let tree = Dijkstra::new().compute_tree(&graph, source).unwrap();
    assert_eq!(tree.distance_to(target), Some(18));

    let path = shortest_path(&tree.edges, target, source).unwrap();
    assert_eq!(path.len(), 18);
    assert_walk(&graph, &path, source, target);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let width = 10;
    let mut graph = generate_grid(width, 10, 1);

    // Create a wall of obstacles in column 5, leaving the bottom two rows open
    let obstacles: Vec<usize> = (0..8).map(|y| y * width + 5).collect();
    for &obstacle in &obstacles {
        for neighbor in [obstacle - 1, obstacle + 1, obstacle + width] {
            graph.remove_edge(obstacle, neighbor);
        }
        if obstacle >= width {
            graph.remove_edge(obstacle, obstacle - width);
        }
    }

    let source = 0;
    let target = 9; // Top-right corner, on the other side of the wall

    let tree = Dijkstra::new()
        .with_reachable_only(true)
        .compute_tree(&graph, source)
        .unwrap();

    // Down to row 8, across, and back up
    assert_eq!(tree.distance_to(target), Some(9 + 8 + 8));

    let path = shortest_path(&tree.edges, target, source).unwrap();
    assert_walk(&graph, &path, source, target);
    for edge in &path {
        assert!(!obstacles.contains(&edge.to), "Path should avoid obstacles");
    }
}

#[test]
fn test_path_to_start_is_empty() {
    let graph = generate_grid(3, 3, 2);
    let tree = Dijkstra::new().compute_tree(&graph, 4).unwrap();

    assert_eq!(shortest_path(&tree.edges, 4, 4), Ok(vec![]));
}

#[test]
fn test_path_weights_sum_to_distance() {
    let graph = UndirectedGraph::from_edges(
        6,
        &[(0, 1, 7u64), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)],
    )
    .unwrap();

    let tree = Dijkstra::new().compute_tree(&graph, 0).unwrap();
    let index = PathIndex::new(&tree.edges);

    let expected = [0, 7, 9, 20, 20, 11];
    for (v, &distance) in expected.iter().enumerate() {
        assert_eq!(tree.distance_to(v), Some(distance));
        assert_eq!(index.distance(v, 0), Ok(distance));
    }

    let path = index.path(4, 0).unwrap();
    assert_eq!(path, vec![Edge::new(0, 2, 9), Edge::new(2, 5, 2), Edge::new(5, 4, 9)]);
}

#[test]
fn test_all_shortest_paths() {
    let graph = UndirectedGraph::from_edges(4, &[(0, 1, 1u64), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)]).unwrap();
    let tree = Dijkstra::new().compute_tree(&graph, 0).unwrap();

    let paths = all_shortest_paths(&tree.edges, 4, 0).unwrap();
    assert_eq!(paths.len(), 4);
    assert!(paths[0].is_empty());
    assert_eq!(paths[1], vec![Edge::new(0, 1, 1)]);
    assert_eq!(paths[3], vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 1)]);

    for (v, path) in paths.iter().enumerate() {
        let total: u64 = path.iter().map(|e| e.weight).sum();
        assert_eq!(Some(total), tree.distance_to(v));
    }
}

#[test]
fn test_all_shortest_paths_rejects_bad_start() {
    let tree = vec![Edge::new(0, 1, 1u64), Edge::new(1, 2, 2)];

    assert_eq!(all_shortest_paths(&tree, 3, 3), Err(Error::InvalidVertex(3)));
    assert_eq!(all_shortest_paths(&tree, 3, 1), Err(Error::InvalidVertex(1)));
}

#[test]
fn test_inconsistent_tree_is_detected() {
    let tree = vec![Edge::new(0, 1, 1u64)];
    assert_eq!(shortest_path(&tree, 5, 0), Err(Error::VertexNotInTree(5)));

    let cyclic = vec![Edge::new(1, 2, 1u64), Edge::new(2, 1, 1)];
    assert_eq!(shortest_path(&cyclic, 1, 0), Err(Error::VertexNotInTree(1)));

    let missing = vec![Edge::new(0, 1, 1u64), Edge::new(3, 2, 1)];
    assert_eq!(all_shortest_paths(&missing, 4, 0), Err(Error::VertexNotInTree(3)));
}

#[test]
fn test_huge_vertex_ids_do_not_size_the_index() {
    let tree = vec![Edge::new(0, 1, 1u64), Edge::new(1, usize::MAX, 3)];

    assert_eq!(shortest_path(&tree, 1, 0), Ok(vec![Edge::new(0, 1, 1)]));
    assert_eq!(
        shortest_path(&tree, usize::MAX, 0),
        Ok(vec![Edge::new(0, 1, 1), Edge::new(1, usize::MAX, 2)])
    );
    let far = 1_000_000_000_000;
    assert_eq!(shortest_path(&tree, far, 0), Err(Error::VertexNotInTree(far)));
}

#[test]
fn test_decreasing_distances_are_reported() {
    // A child closer to the start than its parent cannot come from Dijkstra
    let tree = vec![Edge::new(0, 1, 5u64), Edge::new(1, 2, 3)];

    assert_eq!(shortest_path(&tree, 1, 0), Ok(vec![Edge::new(0, 1, 5)]));
    assert_eq!(shortest_path(&tree, 2, 0), Err(Error::WeightOverflow { from: 1, to: 2 }));
}
