use std::{error::Error, path::PathBuf, time::Instant};

use crate::error::IngestError;
use crate::parsing::{Band, read_catalog};
use crate::weighting::{BandGraph, WeightingConfig, build_band_graph};
use tracing::info;

pub const DEFAULT_DATA_PATH: &str = "data/bands.csv";
pub const DATA_PATH_ENV: &str = "MUSICMAPPER_DATA";

pub struct MusicMapperApp {
    pub data_path: PathBuf,
    pub weighting: WeightingConfig,
}

pub struct LoadedCatalog {
    pub bands: Vec<Band>,
    pub graph: BandGraph,
    pub load_duration: f64,
}

impl MusicMapperApp {
    pub fn new(data_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let data_path = data_path
            .or_else(|| std::env::var(DATA_PATH_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        if !data_path.exists() {
            return Err(format!(
                "Data file not found: {:?}. Put the band catalogue in a 'data' folder or pass --data",
                data_path
            )
            .into());
        }

        Ok(Self {
            data_path,
            weighting: WeightingConfig::default(),
        })
    }

    pub fn load_catalog(&self) -> Result<LoadedCatalog, IngestError> {
        let load_timer = Instant::now();

        let bands = read_catalog(&self.data_path)?;
        let graph = build_band_graph(&bands, &self.weighting)?;

        info!(
            bands = bands.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            path = ?self.data_path,
            "loaded band catalogue"
        );

        Ok(LoadedCatalog {
            bands,
            graph,
            load_duration: load_timer.elapsed().as_secs_f64(),
        })
    }
}
