use crate::error::IngestError;
use crate::parsing::Band;
use musicmapper_core::{Weight, WeightedDirectedGraph};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Constants of the band similarity heuristic. Lower weight means more similar.
#[derive(Debug, Clone)]
pub struct WeightingConfig {
    /// Starting weight of an edge between two bands sharing a genre
    pub base_weight: Weight,
    /// Fan counts are bucketed into points of this size before comparing
    pub fans_per_point: f64,
    /// Subtracted once per country the two bands have in common. Each shared
    /// country really lowers the weight (floored at 0), so bands from the same
    /// countries rank closer than the plain fan/year distance says.
    pub shared_country_bonus: Weight,
    /// Subtracted for every genre shared beyond the first
    pub shared_genre_bonus: Weight,
}

impl WeightingConfig {
    pub fn new(
        base_weight: Weight,
        fans_per_point: f64,
        shared_country_bonus: Weight,
        shared_genre_bonus: Weight,
    ) -> Self {
        Self {
            base_weight,
            fans_per_point,
            shared_country_bonus,
            shared_genre_bonus,
        }
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            base_weight: 10,
            fans_per_point: 500.0,
            shared_country_bonus: 1,
            shared_genre_bonus: 2,
        }
    }
}

pub type BandGraph = WeightedDirectedGraph<String>;

/// Builds the similarity graph: one vertex per band, and an edge in both
/// directions between every pair of bands that share a genre.
///
/// Later rows repeating a band name are skipped.
pub fn build_band_graph(bands: &[Band], config: &WeightingConfig) -> Result<BandGraph, IngestError> {
    let mut graph = WeightedDirectedGraph::new();
    let mut unique_bands = Vec::with_capacity(bands.len());

    for band in bands {
        if graph.insert_vertex(band.name.clone())? {
            unique_bands.push(band);
        } else {
            warn!(band = %band.name, "duplicate band row skipped");
        }
    }

    for (genre, members) in group_by_genre(&unique_bands) {
        debug!(genre = %genre, members = members.len(), "linking genre");
        for band in &members {
            for other in &members {
                if band.name != other.name {
                    link_bands(&mut graph, band, other, config)?;
                }
            }
        }
    }

    Ok(graph)
}

/// Fails with `WeightOverflow` when fan points or years are too far apart
/// to fit a `Weight`.
pub fn initial_weight(
    band: &Band,
    other: &Band,
    config: &WeightingConfig,
) -> Result<Weight, IngestError> {
    let overflow = || IngestError::WeightOverflow {
        band: band.name.clone(),
        other: other.name.clone(),
    };

    let fan_difference = fan_points(band, config)
        .zip(fan_points(other, config))
        .and_then(|(points, other_points)| points.checked_sub(other_points))
        .and_then(Weight::checked_abs);
    let year_difference = band
        .year
        .checked_sub(other.year)
        .and_then(Weight::checked_abs);

    let mut weight = fan_difference
        .zip(year_difference)
        .and_then(|(fans, years)| config.base_weight.checked_add(fans)?.checked_add(years))
        .ok_or_else(overflow)?;

    for country in &band.countries {
        if other.countries.contains(country) {
            weight = weight.saturating_sub(config.shared_country_bonus).max(0);
        }
    }

    Ok(weight)
}

/// `None` when the bucketed fan count does not fit a `Weight`.
fn fan_points(band: &Band, config: &WeightingConfig) -> Option<Weight> {
    let points = (band.fans / config.fans_per_point).ceil();
    // `as` saturates silently, so range-check first
    (points.is_finite() && points >= Weight::MIN as f64 && points < Weight::MAX as f64)
        .then_some(points as Weight)
}

fn link_bands(
    graph: &mut BandGraph,
    band: &Band,
    other: &Band,
    config: &WeightingConfig,
) -> Result<(), IngestError> {
    let weight = if graph.contains_edge(&band.name, &other.name)? {
        // Another shared genre
        let current = graph.get_weight(&band.name, &other.name)?;
        current.saturating_sub(config.shared_genre_bonus).max(0)
    } else {
        initial_weight(band, other, config)?
    };

    graph.insert_edge(&band.name, &other.name, weight)?;
    Ok(())
}

/// Genre members in first-seen order, without repeats.
fn group_by_genre<'a>(bands: &[&'a Band]) -> Vec<(String, Vec<&'a Band>)> {
    let mut genre_positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut genres: Vec<(String, Vec<&'a Band>)> = Vec::new();

    for &band in bands {
        for genre in &band.genres {
            let position = *genre_positions.entry(genre.as_str()).or_insert_with(|| {
                genres.push((genre.clone(), Vec::new()));
                genres.len() - 1
            });

            let members = &mut genres[position].1;
            if !members.iter().any(|member| member.name == band.name) {
                members.push(band);
            }
        }
    }

    genres
}
