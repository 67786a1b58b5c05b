use clap::Parser;
use musicmapper::args::split_band_list;
use musicmapper::colors::ColorScheme;
use musicmapper::display::{display_catalog_statistics, display_recommendations, display_search_info};
use musicmapper::json_output::{JsonStats, create_json_output, print_json_output};
use musicmapper::{Args, MusicMapperApp, find_recommendations};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(error) = run(args) {
        eprintln!("{} {}", ColorScheme::new(true).error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let colors = ColorScheme::new(!args.no_color && !args.json);
    let app = MusicMapperApp::new(args.data.clone())?;
    let catalog = app.load_catalog()?;

    let mut requested = args.requested_bands();
    if requested.is_empty() {
        requested = prompt_for_bands()?;
    }
    if requested.is_empty() {
        return Err("no bands given".into());
    }

    if !args.json {
        display_search_info(&requested, &colors);
    }

    let config = args.recommendation_config();
    let search_timer = Instant::now();
    let report = find_recommendations(&catalog.graph, &requested, &config)?;
    let search_duration = search_timer.elapsed().as_secs_f64();

    if args.json {
        let stats = JsonStats {
            load_time_ms: (catalog.load_duration * 1000.0) as u64,
            search_time_ms: (search_duration * 1000.0) as u64,
            bands_in_graph: catalog.graph.vertex_count(),
        };
        print_json_output(&create_json_output(requested, report, &config, stats));
        return Ok(());
    }

    if args.verbose {
        println!("\n---\n");
    }
    display_recommendations(&report, args.verbose, &colors);
    if args.verbose {
        println!("\n---\n");
        display_catalog_statistics(&catalog, &colors);
        println!(
            "{} Searched in {} sec",
            colors.stats("📊"),
            colors.number(&format!("{:.3}", search_duration))
        );
    }

    Ok(())
}

fn prompt_for_bands() -> io::Result<Vec<String>> {
    print!("Enter bands you like, separated by commas: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(split_band_list(&line))
}
