use crate::app::LoadedCatalog;
use crate::colors::ColorScheme;
use crate::recommend::{Recommendation, RecommendationReport};

pub fn display_search_info(requested: &[String], colors: &ColorScheme) {
    let names = requested
        .iter()
        .map(|band| colors.band_name(&format!("\"{}\"", band)).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("🎵 Finding bands similar to {}", names);
    println!("🔍 Searching...");
}

pub fn display_catalog_statistics(catalog: &LoadedCatalog, colors: &ColorScheme) {
    println!(
        "{} Loaded {} bands with {} connections in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(catalog.graph.vertex_count())),
        colors.number(&format_number(catalog.graph.edge_count())),
        colors.number(&format!("{:.3}", catalog.load_duration))
    );
}

pub fn display_recommendations(report: &RecommendationReport, verbose: bool, colors: &ColorScheme) {
    for skipped in &report.skipped {
        println!(
            "{} {}",
            colors.warning("⚠️  Not in the catalogue, skipping"),
            colors.band_name(&format!("\"{}\"", skipped))
        );
    }

    match &report.recommendations {
        None => println!("{}", colors.error("❌ None of the given bands were found")),
        Some(recommendations) if recommendations.is_empty() => {
            println!("{}", colors.error("❌ No similar bands found"))
        }
        Some(recommendations) => {
            println!(
                "{} Top {} recommendations:\n",
                colors.success("✅"),
                colors.number(&recommendations.len().to_string())
            );
            for (rank, recommendation) in recommendations.iter().enumerate() {
                println!("{}", format_recommendation(rank, recommendation, verbose, colors));
            }
        }
    }
}

fn format_recommendation(
    rank: usize,
    recommendation: &Recommendation,
    verbose: bool,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:2} {}",
        colors.rank(&format!("{}.", rank + 1)),
        colors.band_name(&format!("\"{}\"", recommendation.name))
    );

    if verbose {
        formatted_line.push_str(&format!(
            " [score {}, {} matches]",
            colors.number(&recommendation.score.to_string()),
            colors.number(&recommendation.matches.to_string())
        ));
    }

    formatted_line
}

/// Groups digits in threes: `1234567` becomes `1,234,567`.
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
