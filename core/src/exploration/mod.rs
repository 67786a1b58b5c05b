pub mod dijkstra;

pub use dijkstra::{dijkstra_reachable_order, explore_dijkstra};

use crate::pathfinding::SearchStats;

#[derive(Debug, Clone)]
pub struct ExplorationResult<T> {
    pub order: Vec<T>,
    pub stats: ExplorationStats,
}

#[derive(Debug, Clone)]
pub struct ExplorationStats {
    pub search: SearchStats,
    pub duration_ms: u64,
}

impl<T> ExplorationResult<T> {
    pub fn new(order: Vec<T>, search: SearchStats, duration_ms: u64) -> Self {
        Self {
            order,
            stats: ExplorationStats {
                search,
                duration_ms,
            },
        }
    }

    pub fn total_discovered(&self) -> usize {
        self.order.len()
    }
}
