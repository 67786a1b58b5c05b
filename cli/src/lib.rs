pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod error;
pub mod json_output;
pub mod parsing;
pub mod recommend;
pub mod string_normalization;
pub mod weighting;

// Re-export commonly used items
pub use app::{LoadedCatalog, MusicMapperApp};
pub use args::Args;
pub use error::IngestError;
pub use parsing::{Band, parse_catalog, read_catalog};
pub use recommend::{Recommendation, RecommendationConfig, RecommendationReport, find_recommendations};
pub use weighting::{BandGraph, WeightingConfig, build_band_graph};
