use super::ExplorationResult;
use crate::error::{GraphError, GraphResult};
use crate::graph::WeightedDirectedGraph;
use crate::label::Label;
use crate::pathfinding::{Path, SearchState};
use std::time::Instant;
use tracing::debug;

/// End labels of every path popped from `center`, in pop order.
///
/// `center` itself comes first. A vertex with no unvisited leaving edges is
/// never settled, so it can be popped (and listed) once per branch that
/// reaches it.
pub fn dijkstra_reachable_order<T: Label>(
    graph: &WeightedDirectedGraph<T>,
    center: &T,
) -> GraphResult<Vec<T>> {
    explore_dijkstra(graph, center).map(|result| result.order)
}

pub fn explore_dijkstra<T: Label>(
    graph: &WeightedDirectedGraph<T>,
    center: &T,
) -> GraphResult<ExplorationResult<T>> {
    if center.is_null() {
        return Err(GraphError::NullInput {
            operation: "reachable_order",
        });
    }
    let center_id = graph.id_of(center).ok_or_else(|| {
        GraphError::NotFound("no valid path: vertex is not in the graph".to_string())
    })?;

    let start_time = Instant::now();
    let mut explorer = SearchState::new(Path::seed(center_id, center.clone()));
    let mut order = Vec::new();

    while let Some(current_path) = explorer.pop_unsettled() {
        if let Some(label) = current_path.end_label() {
            order.push(label.clone());
        }
        explorer.expand(graph, &current_path)?;
    }

    let duration_ms = start_time.elapsed().as_millis() as u64;
    debug!(
        discovered = order.len(),
        paths_popped = explorer.stats.paths_popped,
        paths_discarded = explorer.stats.paths_discarded,
        duration_ms,
        "exploration finished"
    );

    Ok(ExplorationResult::new(order, explorer.stats, duration_ms))
}
