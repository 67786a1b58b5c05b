use musicmapper::weighting::initial_weight;
use musicmapper::{Band, IngestError, WeightingConfig, build_band_graph, parse_catalog};
use pretty_assertions::assert_eq;

fn band(name: &str, fans: f64, year: i64, countries: &[&str], genres: &[&str]) -> Band {
    Band {
        name: name.to_string(),
        fans,
        year,
        countries: countries.iter().map(|c| c.to_string()).collect(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn s(label: &str) -> String {
    label.to_string()
}

fn thrash_catalog() -> Vec<Band> {
    vec![
        // 2 fan points
        band("anthrax", 1000.0, 1980, &["usa"], &["thrash", "heavy"]),
        // ceil(2600 / 500) = 6 fan points
        band("bathory", 2600.0, 1983, &["usa", "uk"], &["thrash", "heavy"]),
        band("candlemass", 0.0, 1990, &["sweden"], &["heavy"]),
    ]
}

#[test]
fn test_initial_weight_combines_fans_year_and_countries() {
    let bands = thrash_catalog();
    let config = WeightingConfig::default();

    // 10 + |2 - 6| + |1980 - 1983| - 1 shared country
    assert_eq!(initial_weight(&bands[0], &bands[1], &config).unwrap(), 16);
    // 10 + |2 - 0| + |1980 - 1990|
    assert_eq!(initial_weight(&bands[0], &bands[2], &config).unwrap(), 22);
}

#[test]
fn test_initial_weight_is_floored_at_zero() {
    let twin = band("twin", 500.0, 2000, &["usa", "uk"], &["rock"]);
    let other = band("other", 500.0, 2000, &["usa", "uk"], &["rock"]);
    let config = WeightingConfig::new(0, 500.0, 5, 2);

    assert_eq!(initial_weight(&twin, &other, &config).unwrap(), 0);
}

#[test]
fn test_bands_sharing_a_genre_are_linked_both_ways() {
    let graph = build_band_graph(&thrash_catalog(), &WeightingConfig::default()).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.get_weight(&s("anthrax"), &s("candlemass")), Ok(22));
    assert_eq!(graph.get_weight(&s("candlemass"), &s("anthrax")), Ok(22));
    // 10 + |6 - 0| + |1983 - 1990|
    assert_eq!(graph.get_weight(&s("bathory"), &s("candlemass")), Ok(23));
}

#[test]
fn test_each_extra_shared_genre_lowers_the_weight() {
    let graph = build_band_graph(&thrash_catalog(), &WeightingConfig::default()).unwrap();

    // 16 from the first shared genre, minus 2 for the second
    assert_eq!(graph.get_weight(&s("anthrax"), &s("bathory")), Ok(14));
    assert_eq!(graph.get_weight(&s("bathory"), &s("anthrax")), Ok(14));
}

#[test]
fn test_bands_without_common_genre_stay_unlinked() {
    let bands = vec![
        band("abba", 100.0, 1972, &["sweden"], &["pop"]),
        band("bathory", 100.0, 1983, &["sweden"], &["black metal"]),
    ];

    let graph = build_band_graph(&bands, &WeightingConfig::default()).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.reachable_order(&s("abba")), Ok(vec![s("abba")]));
}

#[test]
fn test_duplicate_rows_keep_the_first() {
    let mut bands = thrash_catalog();
    bands.push(band("anthrax", 99_000.0, 2020, &[], &["pop", "heavy"]));

    let graph = build_band_graph(&bands, &WeightingConfig::default()).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.get_weight(&s("anthrax"), &s("candlemass")), Ok(22));
}

#[test]
fn test_extreme_years_are_rejected_instead_of_overflowing() {
    let bands = parse_catalog(
        "name,fans,year,countries,genres\n\
         a,0,9223372036854775807,usa,rock\n\
         b,0,-1,usa,rock\n",
    )
    .unwrap();

    let error = build_band_graph(&bands, &WeightingConfig::default()).unwrap_err();

    assert!(matches!(error, IngestError::WeightOverflow { .. }));
}

#[test]
fn test_huge_fan_counts_are_rejected_instead_of_overflowing() {
    let bands = parse_catalog(
        "name,fans,year,countries,genres\n\
         a,1e300,1980,usa,rock\n\
         b,0,1980,usa,rock\n",
    )
    .unwrap();

    let error = build_band_graph(&bands, &WeightingConfig::default()).unwrap_err();

    assert_eq!(
        error.to_string(),
        "Weight between 'a' and 'b' is out of range"
    );
}

#[test]
fn test_large_but_representable_differences_still_link() {
    let bands = vec![
        band("old", 0.0, -1_000_000, &[], &["rock"]),
        band("new", 0.0, 1_000_000, &[], &["rock"]),
    ];

    let graph = build_band_graph(&bands, &WeightingConfig::default()).unwrap();

    assert_eq!(graph.get_weight(&s("old"), &s("new")), Ok(2_000_010));
}
