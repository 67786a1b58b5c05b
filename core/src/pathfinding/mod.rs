pub mod dijkstra;
mod frontier;
pub mod path;

pub(crate) use frontier::SearchState;

// Re-export the public items
pub use dijkstra::{dijkstra_find_path, dijkstra_find_path_with_stats};
pub use frontier::SearchStats;
pub use path::Path;
