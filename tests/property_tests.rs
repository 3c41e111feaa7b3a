//! Property-based tests using proptest.
//!
//! Trees are checked against brute-force references: Kruskal for MST weight and
//! Floyd-Warshall for shortest distances.

use greedy_trees::algorithm::path::PathIndex;
use greedy_trees::graph::UndirectedGraph;
use greedy_trees::{compute_mst, Dijkstra, Edge, Prim, SpanningTreeAlgorithm};
use proptest::prelude::*;
use proptest::sample::Index;

type EdgeList = Vec<(usize, usize, u64)>;

// Strategy for connected graphs: a random spanning tree plus random extra edges
fn connected_graph() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..12)
        .prop_flat_map(|n| {
            let tree: Vec<_> = (1..n)
                .map(|v| (0..v, 0u64..50).prop_map(move |(u, w)| (u, v, w)))
                .collect();
            let extra = proptest::collection::vec((0..n, 0..n, 0u64..50), 0..20);
            (Just(n), tree, extra)
        })
        .prop_map(|(n, mut edges, extra)| {
            edges.extend(extra);
            (n, edges)
        })
}

fn find(parent: &mut Vec<usize>, v: usize) -> usize {
    if parent[v] != v {
        let root = find(parent, parent[v]);
        parent[v] = root;
    }
    parent[v]
}

fn kruskal_weight(n: usize, edges: &EdgeList) -> u64 {
    let mut sorted = edges.clone();
    sorted.sort_by_key(|&(_, _, w)| w);
    let mut parent: Vec<usize> = (0..n).collect();
    let mut total = 0;
    for (u, v, w) in sorted {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            total += w;
        }
    }
    total
}

fn floyd_warshall(n: usize, edges: &EdgeList) -> Vec<Vec<Option<u64>>> {
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for &(u, v, w) in edges {
        for (a, b) in [(u, v), (v, u)] {
            if dist[a][b].map_or(true, |d| w < d) {
                dist[a][b] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

// Every edge joins two previously separate components
fn assert_spanning_tree(n: usize, tree: &[Edge<u64>]) {
    assert_eq!(tree.len(), n - 1);
    let mut parent: Vec<usize> = (0..n).collect();
    for edge in tree {
        assert!(edge.from < n && edge.to < n);
        let (ra, rb) = (find(&mut parent, edge.from), find(&mut parent, edge.to));
        assert_ne!(ra, rb, "tree edge {:?} closes a cycle", edge);
        parent[ra] = rb;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn mst_weight_matches_kruskal((n, edges) in connected_graph(), start in any::<Index>()) {
        let graph = UndirectedGraph::from_edges(n, &edges).unwrap();
        let start = start.index(n);

        let tree = Prim::new().compute_tree(&graph, start).unwrap();
        assert_spanning_tree(n, &tree.edges);
        prop_assert_eq!(tree.total_weight(), Ok(kruskal_weight(n, &edges)));

        for edge in &tree.edges {
            prop_assert_eq!(graph.edge_weight(edge.from, edge.to), Some(edge.weight));
            prop_assert_eq!(tree.distance_to(edge.to), Some(edge.weight));
        }
    }

    #[test]
    fn shortest_path_tree_matches_floyd_warshall((n, edges) in connected_graph(), start in any::<Index>()) {
        let graph = UndirectedGraph::from_edges(n, &edges).unwrap();
        let start = start.index(n);
        let reference = floyd_warshall(n, &edges);

        let tree = Dijkstra::new().compute_tree(&graph, start).unwrap();
        assert_spanning_tree(n, &tree.edges);

        let index = PathIndex::new(&tree.edges);
        for v in 0..n {
            prop_assert_eq!(tree.distance_to(v), reference[start][v]);
            prop_assert_eq!(index.distance(v, start).ok(), reference[start][v]);
        }
        for edge in &tree.edges {
            prop_assert_eq!(tree.distance_to(edge.to), Some(edge.weight));
        }
        for v in 0..n {
            let path = index.path(v, start).unwrap();
            let total = path.iter().map(|e| e.weight).sum::<u64>();
            prop_assert_eq!(Some(total), reference[start][v]);
            for edge in &path {
                prop_assert_eq!(graph.edge_weight(edge.from, edge.to), Some(edge.weight));
            }
        }
    }

    #[test]
    fn runs_are_idempotent((n, edges) in connected_graph(), start in any::<Index>()) {
        let graph = UndirectedGraph::from_edges(n, &edges).unwrap();
        let start = start.index(n);

        prop_assert_eq!(compute_mst(&graph, start), compute_mst(&graph, start));
        let dijkstra = Dijkstra::new();
        prop_assert_eq!(dijkstra.compute_tree(&graph, start), dijkstra.compute_tree(&graph, start));
    }
}
