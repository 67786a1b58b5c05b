use super::{Path, SearchState, SearchStats};
use crate::error::{GraphError, GraphResult};
use crate::graph::WeightedDirectedGraph;
use crate::label::Label;
use tracing::debug;

/// Cheapest path from `start` to `end`.
///
/// Fails with `NotFound` when either vertex is absent or the frontier drains
/// before `end` is popped.
pub fn dijkstra_find_path<T: Label>(
    graph: &WeightedDirectedGraph<T>,
    start: &T,
    end: &T,
) -> GraphResult<Path<T>> {
    dijkstra_find_path_with_stats(graph, start, end).map(|(path, _)| path)
}

pub fn dijkstra_find_path_with_stats<T: Label>(
    graph: &WeightedDirectedGraph<T>,
    start: &T,
    end: &T,
) -> GraphResult<(Path<T>, SearchStats)> {
    if start.is_null() || end.is_null() {
        return Err(GraphError::NullInput {
            operation: "shortest_path",
        });
    }

    let (Some(start_id), Some(_)) = (graph.id_of(start), graph.id_of(end)) else {
        return Err(GraphError::NotFound(
            "no valid path: start or end vertex is not in the graph".to_string(),
        ));
    };

    let mut dijkstra_state = SearchState::new(Path::seed(start_id, start.clone()));

    while let Some(current_path) = dijkstra_state.pop_unsettled() {
        dijkstra_state.expand(graph, &current_path)?;

        if current_path.end_label() == Some(end) {
            let stats = dijkstra_state.stats;
            debug!(
                start = current_path.start().index(),
                end = current_path.end().index(),
                distance = current_path.distance(),
                hops = current_path.hops(),
                paths_popped = stats.paths_popped,
                peak_frontier = stats.peak_frontier,
                "shortest path found"
            );
            return Ok((current_path, stats));
        }
    }

    debug!(
        paths_popped = dijkstra_state.stats.paths_popped,
        "frontier drained without reaching target"
    );
    Err(GraphError::NotFound(
        "no valid path between these vertices".to_string(),
    ))
}
