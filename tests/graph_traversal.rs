//! Graph construction and traversal tests.

use classic_algorithms::graph::{bfs, dfs, Graph, GraphBuilder};
use classic_algorithms::types::AlgoError;

use std::collections::HashSet;

// ==================== Helper ====================

/// The five-node demo graph: 0-1, 0-4, 1-2, 1-3, 1-4, 2-3, 3-4.
fn demo_graph() -> Graph<String> {
    let mut builder = GraphBuilder::new();
    for (a, b) in [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)] {
        builder.edge(a.to_string(), b.to_string());
    }
    builder.build()
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ==================== Graph Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    let graph = demo_graph();
    for (node, adjacent) in graph.iter() {
        for other in adjacent {
            assert!(
                graph.neighbors(other).unwrap().contains(node),
                "{} lists {} but not the reverse",
                node,
                other
            );
        }
    }
}

#[test]
fn test_nodes_created_on_first_reference() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());
    graph.add_edge("a", "b");
    assert!(graph.contains(&"a"));
    assert!(graph.contains(&"b"));
    assert!(!graph.contains(&"c"));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edges_accumulate() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    graph.add_edge(1, 2);
    assert_eq!(graph.neighbors(&1).unwrap(), &[2, 2]);
    assert_eq!(graph.neighbors(&2).unwrap(), &[1, 1]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_self_loop_listed_twice() {
    let mut graph = Graph::new();
    graph.add_edge(7, 7);
    assert_eq!(graph.neighbors(&7).unwrap(), &[7, 7]);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_neighbors_missing_node() {
    let graph = demo_graph();
    match graph.neighbors(&"9".to_string()) {
        Err(AlgoError::NodeNotFound(_)) => {}
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_display_follows_insertion_order() {
    let graph = demo_graph();
    let expected = "0 -> [1, 4]\n\
                    1 -> [0, 2, 3, 4]\n\
                    4 -> [0, 1, 3]\n\
                    2 -> [1, 3]\n\
                    3 -> [1, 2, 4]\n";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_from_spec_parses_edges() {
    let graph = GraphBuilder::from_spec(" a-b , b-c,, ").unwrap().build();
    assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), names(&["a", "b", "c"]));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_from_spec_rejects_malformed_edge() {
    for spec in ["a", "a-", "-b"] {
        match GraphBuilder::from_spec(spec) {
            Err(AlgoError::InvalidEdge(item)) => assert_eq!(item, spec),
            Err(e) => panic!("Expected InvalidEdge, got {:?}", e),
            Ok(_) => panic!("Expected InvalidEdge for {:?}", spec),
        }
    }
}

#[test]
fn test_graph_from_iterator() {
    let graph: Graph<u32> = vec![(1, 2), (2, 3)].into_iter().collect();
    assert_eq!(graph.neighbors(&2).unwrap(), &[1, 3]);
}

#[test]
fn test_graph_serializes_in_order() {
    let mut graph = Graph::new();
    graph.add_edge("x".to_string(), "y".to_string());
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"node": "x", "adjacent": ["y"]},
            {"node": "y", "adjacent": ["x"]},
        ])
    );
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_visits_all_within_depth() {
    let graph = demo_graph();
    let order = bfs(&graph, &"0".to_string(), 5).unwrap();
    assert_eq!(order, names(&["0", "1", "4", "2", "3"]));
}

#[test]
fn test_bfs_depth_one() {
    let graph = demo_graph();
    let order = bfs(&graph, &"0".to_string(), 1).unwrap();
    assert_eq!(order, names(&["0", "1", "4"]));
}

#[test]
fn test_bfs_depth_zero_is_start_only() {
    let graph = demo_graph();
    let order = bfs(&graph, &"3".to_string(), 0).unwrap();
    assert_eq!(order, names(&["3"]));
}

#[test]
fn test_bfs_negative_depth_is_empty() {
    let graph = demo_graph();
    let order = bfs(&graph, &"0".to_string(), -1).unwrap();
    assert!(order.is_empty());
}

#[test]
fn test_bfs_missing_start() {
    let graph = demo_graph();
    match bfs(&graph, &"42".to_string(), 3) {
        Err(AlgoError::NodeNotFound(node)) => assert!(node.contains("42")),
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_bfs_chain_respects_bound() {
    let graph: Graph<u32> = (0..10).map(|i| (i, i + 1)).collect();
    assert_eq!(bfs(&graph, &0, 3).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(bfs(&graph, &5, 2).unwrap(), vec![5, 4, 6, 3, 7]);
}

#[test]
fn test_bfs_disconnected_component_unreached() {
    let graph: Graph<u32> = vec![(1, 2), (3, 4)].into_iter().collect();
    assert_eq!(bfs(&graph, &1, 10).unwrap(), vec![1, 2]);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_visits_every_node_once() {
    let graph = demo_graph();
    let order = dfs(&graph, &"0".to_string()).unwrap();
    assert_eq!(order.len(), 5);
    let unique: HashSet<&String> = order.iter().collect();
    let expected = names(&["0", "1", "2", "3", "4"]);
    assert_eq!(unique, expected.iter().collect());
}

#[test]
fn test_dfs_reverses_sibling_order() {
    let graph = demo_graph();
    let order = dfs(&graph, &"0".to_string()).unwrap();
    assert_eq!(order, names(&["0", "4", "3", "2", "1"]));

    let star: Graph<u32> = vec![(0, 1), (0, 2), (0, 3)].into_iter().collect();
    assert_eq!(dfs(&star, &0).unwrap(), vec![0, 3, 2, 1]);
}

#[test]
fn test_dfs_handles_cycles_and_multi_edges() {
    let graph: Graph<u32> = vec![(1, 2), (2, 3), (3, 1), (1, 2)].into_iter().collect();
    let order = dfs(&graph, &1).unwrap();
    assert_eq!(order.len(), 3);
}

#[test]
fn test_dfs_missing_start() {
    let graph: Graph<u32> = Graph::new();
    assert!(matches!(dfs(&graph, &0), Err(AlgoError::NodeNotFound(_))));
}

#[test]
fn test_builder_edges_keeps_order() {
    let mut builder = GraphBuilder::new();
    builder.edge('a', 'b').edges(vec![('c', 'a'), ('b', 'c')]);
    let graph = builder.build();
    assert_eq!(graph.nodes().copied().collect::<String>(), "abc");
    assert_eq!(graph.neighbors(&'a').unwrap(), &['b', 'c']);
}
