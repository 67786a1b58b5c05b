use crate::recommend::{Recommendation, RecommendationConfig, RecommendationReport};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub bands: Vec<String>,
    pub options: JsonOptions,
}

#[derive(Serialize)]
pub struct JsonOptions {
    pub top: usize,
    pub max_candidates: usize,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    pub resolved: Vec<String>,
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub load_time_ms: u64,
    pub search_time_ms: u64,
    pub bands_in_graph: usize,
}

pub fn create_json_output(
    requested: Vec<String>,
    report: RecommendationReport,
    config: &RecommendationConfig,
    stats: JsonStats,
) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            bands: requested,
            options: JsonOptions {
                top: config.top,
                max_candidates: config.max_candidates,
            },
        },
        result: JsonResult {
            found: report
                .recommendations
                .as_ref()
                .is_some_and(|recommendations| !recommendations.is_empty()),
            resolved: report.resolved,
            skipped: report.skipped,
            recommendations: report.recommendations,
        },
        stats,
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
