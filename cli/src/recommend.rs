use crate::string_normalization::clean_str;
use crate::weighting::BandGraph;
use musicmapper_core::GraphResult;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

/// Configuration for ranking recommendations
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Stop collecting candidates once this many are gathered
    pub max_candidates: usize,
    /// Number of recommendations returned
    pub top: usize,
}

impl RecommendationConfig {
    pub fn new(max_candidates: usize, top: usize) -> Self {
        Self {
            max_candidates,
            top,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_candidates: 1000,
            top: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    /// Average position across the reachability orders it appears in; lower is closer
    pub score: i64,
    pub matches: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationReport {
    pub resolved: Vec<String>,
    pub skipped: Vec<String>,
    /// `None` when none of the requested bands is in the graph
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Candidate {
    total_position: i64,
    matches: usize,
}

pub fn find_recommendations(
    graph: &BandGraph,
    requested: &[String],
    config: &RecommendationConfig,
) -> GraphResult<RecommendationReport> {
    let mut report = RecommendationReport::default();
    let mut reachability_orders = Vec::new();

    for raw_name in requested {
        let name = clean_str(raw_name);
        if !name.is_empty() && graph.contains_vertex(&name)? {
            reachability_orders.push(graph.reachable_order(&name)?);
            report.resolved.push(name);
        } else {
            warn!(band = %raw_name.trim(), "band not found in the graph, skipping");
            report.skipped.push(raw_name.trim().to_string());
        }
    }

    if reachability_orders.is_empty() {
        return Ok(report);
    }

    let candidates = score_candidates(&reachability_orders);
    debug!(
        orders = reachability_orders.len(),
        candidates = candidates.len(),
        "scored candidates"
    );

    let mut recommendations = select_candidates(candidates, config.max_candidates);
    recommendations.retain(|candidate| !report.resolved.contains(&candidate.name));
    recommendations.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.name.cmp(&b.name)));
    recommendations.truncate(config.top);

    report.recommendations = Some(recommendations);
    Ok(report)
}

/// Scores every band appearing in two orders by the sum of its first
/// positions in both. With a single order, the order is paired with itself.
fn score_candidates(orders: &[Vec<String>]) -> FxHashMap<String, Candidate> {
    let positions: Vec<FxHashMap<&str, usize>> =
        orders.iter().map(|order| first_positions(order)).collect();
    let mut candidates: FxHashMap<String, Candidate> = FxHashMap::default();

    for i in 0..orders.len() {
        for n in i..orders.len() {
            if n == i && orders.len() > 1 {
                continue;
            }

            let shorter = orders[i].len().min(orders[n].len());
            for band in &orders[n][..shorter] {
                let Some(&position_in_i) = positions[i].get(band.as_str()) else {
                    continue;
                };
                let position_in_n = positions[n][band.as_str()];

                let candidate = candidates.entry(band.clone()).or_default();
                candidate.total_position += (position_in_i + position_in_n) as i64;
                candidate.matches += 1;
            }
        }
    }

    candidates
}

/// Takes the most often matched candidates first, then those matched one
/// fewer time, and so on. The cap is checked between match levels, so a
/// level is never split.
fn select_candidates(
    candidates: FxHashMap<String, Candidate>,
    max_candidates: usize,
) -> Vec<Recommendation> {
    let mut selected = Vec::new();
    let mut required_matches = candidates
        .values()
        .map(|candidate| candidate.matches)
        .max()
        .unwrap_or(0);

    while selected.len() < max_candidates && required_matches > 0 {
        selected.extend(
            candidates
                .iter()
                .filter(|(_, candidate)| candidate.matches == required_matches)
                .map(|(name, candidate)| Recommendation {
                    name: name.clone(),
                    score: candidate.total_position / candidate.matches as i64,
                    matches: candidate.matches,
                }),
        );
        required_matches -= 1;
    }

    selected
}

fn first_positions(order: &[String]) -> FxHashMap<&str, usize> {
    let mut positions = FxHashMap::default();
    for (position, band) in order.iter().enumerate() {
        positions.entry(band.as_str()).or_insert(position);
    }
    positions
}
