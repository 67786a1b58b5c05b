use musicmapper::MusicMapperApp;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,fans,year,countries,genres").unwrap();
    write!(file, "{}", rows).unwrap();
    file
}

#[test]
fn test_app_loads_catalog_into_graph() {
    let file = write_catalog(
        "metallica,5000,1981,usa,heavy metal_thrash metal\n\
         megadeth,3000,1983,usa,heavy metal_thrash metal\n\
         opeth,2000,1990,sweden,progressive metal\n",
    );
    let app = MusicMapperApp::new(Some(file.path().to_string_lossy().into_owned())).unwrap();

    let catalog = app.load_catalog().unwrap();

    assert_eq!(catalog.bands.len(), 3);
    assert_eq!(catalog.graph.vertex_count(), 3);
    assert_eq!(catalog.graph.edge_count(), 2);
    assert!(
        catalog
            .graph
            .contains_edge(&"metallica".to_string(), &"megadeth".to_string())
            .unwrap()
    );
}

#[test]
fn test_app_rejects_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing.csv");

    let result = MusicMapperApp::new(Some(missing.to_string_lossy().into_owned()));

    assert!(result.is_err());
}

#[test]
fn test_app_surfaces_parse_errors() {
    let file = write_catalog("metallica,many,1981,usa,thrash metal\n");
    let app = MusicMapperApp::new(Some(file.path().to_string_lossy().into_owned())).unwrap();

    let error = app.load_catalog().err().unwrap();

    assert_eq!(error.to_string(), "Line 2: invalid fans value 'many'");
}

#[test]
fn test_bundled_catalog_recommends_thrash_for_metallica() {
    let data_path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/bands.csv");
    let app = MusicMapperApp::new(Some(data_path.to_string())).unwrap();
    let catalog = app.load_catalog().unwrap();

    let report = musicmapper::find_recommendations(
        &catalog.graph,
        &["Metallica".to_string()],
        &musicmapper::RecommendationConfig::new(1000, 1),
    )
    .unwrap();

    let recommendations = report.recommendations.unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].name, "megadeth");
}
