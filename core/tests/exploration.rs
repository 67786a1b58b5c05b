use musicmapper_core::{GraphError, WeightedDirectedGraph, dijkstra_reachable_order, explore_dijkstra};

fn create_test_graph(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, i64)],
) -> WeightedDirectedGraph<&'static str> {
    let mut graph = WeightedDirectedGraph::new();
    for vertex in vertices {
        graph.insert_vertex(*vertex).unwrap();
    }
    for (source, target, weight) in edges {
        graph.insert_edge(source, target, *weight).unwrap();
    }
    graph
}

#[test]
fn test_isolated_vertex_reaches_only_itself() {
    let graph = create_test_graph(&["solo", "other"], &[("other", "solo", 3)]);

    assert_eq!(graph.reachable_order(&"solo"), Ok(vec!["solo"]));
}

#[test]
fn test_order_follows_distance() {
    let graph = create_test_graph(
        &["S", "far", "near", "mid"],
        &[("S", "far", 9), ("S", "near", 1), ("near", "mid", 2)],
    );

    assert_eq!(
        graph.reachable_order(&"S"),
        Ok(vec!["S", "near", "mid", "far"])
    );
}

#[test]
fn test_equal_distances_break_ties_by_label() {
    // Z and X both sit at distance 2; X wins on string order.
    let graph = create_test_graph(
        &["S", "Z", "Y", "X"],
        &[("S", "Z", 2), ("S", "Y", 1), ("Y", "X", 1)],
    );

    assert_eq!(
        graph.reachable_order(&"S"),
        Ok(vec!["S", "Y", "X", "Z"])
    );
}

#[test]
fn test_lexicographically_earlier_intermediate_relaxes_first() {
    // S -> B and S -> A cost the same; A is expanded first and its route
    // settles T, so the equal-cost route through B is discarded.
    let graph = create_test_graph(
        &["S", "B", "A", "T", "U"],
        &[
            ("S", "B", 1),
            ("S", "A", 1),
            ("B", "T", 1),
            ("A", "T", 1),
            ("T", "U", 5),
        ],
    );

    let result = explore_dijkstra(&graph, &"S").unwrap();

    assert_eq!(result.order, vec!["S", "A", "B", "T", "U"]);
    assert_eq!(result.stats.search.paths_discarded, 1);
    assert_eq!(result.total_discovered(), 5);
}

#[test]
fn test_unsettled_sink_is_listed_per_branch() {
    // T has no leaving edges, so it is never settled and both branches pop it.
    let graph = create_test_graph(
        &["S", "A", "B", "T"],
        &[("S", "A", 1), ("S", "B", 1), ("A", "T", 1), ("B", "T", 1)],
    );

    assert_eq!(
        dijkstra_reachable_order(&graph, &"S"),
        Ok(vec!["S", "A", "B", "T", "T"])
    );
}

#[test]
fn test_cycles_terminate() {
    let graph = create_test_graph(
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "A", 1), ("B", "C", 1), ("C", "A", 1)],
    );

    assert_eq!(graph.reachable_order(&"A"), Ok(vec!["A", "B", "C"]));
}

#[test]
fn test_self_loop_is_ignored() {
    let graph = create_test_graph(&["A"], &[("A", "A", 0)]);

    assert_eq!(graph.reachable_order(&"A"), Ok(vec!["A"]));
}

#[test]
fn test_missing_center() {
    let graph = create_test_graph(&["A"], &[]);

    assert!(matches!(
        graph.reachable_order(&"B"),
        Err(GraphError::NotFound(_))
    ));
    assert_eq!(
        graph.reachable_order(&""),
        Err(GraphError::NullInput {
            operation: "reachable_order"
        })
    );
}
