pub mod chaining_map;
pub mod error;
pub mod exploration;
pub mod graph;
pub mod label;
pub mod pathfinding;

// Re-export commonly used items
pub use chaining_map::ChainingMap;
pub use error::{GraphError, GraphResult};
pub use exploration::{ExplorationResult, dijkstra_reachable_order, explore_dijkstra};
pub use graph::{Edge, VertexId, Weight, WeightedDirectedGraph};
pub use label::Label;
pub use pathfinding::{Path, SearchStats, dijkstra_find_path};
