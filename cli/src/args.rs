use crate::recommend::RecommendationConfig;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "musicmapper")]
#[command(about = "Recommend bands similar to the ones you already like")]
pub struct Args {
    /// Bands you like, separated by commas (asked for interactively when omitted)
    pub bands: Vec<String>,

    /// Band catalogue CSV (name,fans,year,countries,genres)
    #[arg(short = 'd', long, value_name = "CSV")]
    pub data: Option<String>,

    /// Number of recommendations to show
    #[arg(short = 't', long, value_name = "COUNT", default_value = "5")]
    pub top: usize,

    /// Stop collecting candidates after this many
    #[arg(short = 'c', long, value_name = "COUNT", default_value = "1000")]
    pub max_candidates: usize,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show dataset statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Positional bands, split on commas, trimmed, blanks removed.
    pub fn requested_bands(&self) -> Vec<String> {
        split_band_list(&self.bands.join(","))
    }

    pub fn recommendation_config(&self) -> RecommendationConfig {
        RecommendationConfig::new(self.max_candidates, self.top)
    }
}

pub fn split_band_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|band| !band.is_empty())
        .map(str::to_string)
        .collect()
}
