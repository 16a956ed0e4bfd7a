//! Command line front end: search a route file for places and print them.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use route_scout::assemble::{PlaceResult, PriceTier};
use route_scout::config::ScoutConfig;
use route_scout::filter::PlaceFilter;
use route_scout::parser::{parse_route, RouteFormat};
use route_scout::places::PlacesClient;
use route_scout::scout::{scout, ScoutReport, SearchRequest};
use route_scout::ScoutError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "route-scout", about = "Search for places along a GPX or KML route")]
struct Cli {
    /// Route file (.gpx or .kml)
    route: PathBuf,

    /// What to look for, e.g. "coffee shops"
    query: String,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
    max_results: u32,

    /// Only show places rated at least this high (0 disables)
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,

    /// Allowed price levels ($ to $$$$); repeatable
    #[arg(long = "price", value_parser = parse_price)]
    prices: Vec<PriceTier>,

    /// Only show places currently open
    #[arg(long)]
    open_now: bool,

    /// Maximum distance from the route in miles
    #[arg(long)]
    max_distance_mi: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn parse_price(s: &str) -> Result<PriceTier, String> {
    PriceTier::from_symbol(s).ok_or_else(|| format!("unknown price level '{}'", s))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Search failed");
            eprintln!("{}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ScoutError> {
    let config = ScoutConfig::from_env()?;

    let format = RouteFormat::from_path(&cli.route)?;
    let content = std::fs::read(&cli.route).map_err(|err| {
        ScoutError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", cli.route.display(), err),
        ))
    })?;
    let route = parse_route(&content, format)?;
    tracing::info!(points = route.len(), "Route loaded");

    let client = PlacesClient::new(config.places)?;
    let request = SearchRequest {
        max_results: cli.max_results,
        ..SearchRequest::new(cli.query.clone())
    };
    let filter = PlaceFilter {
        min_rating: cli.min_rating,
        prices: cli.prices.iter().copied().collect::<HashSet<_>>(),
        open_now: cli.open_now,
        max_distance_mi: cli.max_distance_mi,
    };

    let report = scout(&route, &request, &client, &filter)?;
    if cli.json {
        let json = serde_json::to_string_pretty(&report.places)?;
        println!("{}", json);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ScoutReport) {
    if report.is_filtered() {
        println!("Showing {} of {} places", report.places.len(), report.total);
    } else {
        println!("Found {} places", report.places.len());
    }
    if report.total == 0 {
        println!("No results found. Try a different search query.");
    } else if report.places.is_empty() {
        println!("No places match your filters. Try adjusting them.");
    }
    for place in &report.places {
        println!("{}", format_place(place));
    }
}

fn format_place(place: &PlaceResult) -> String {
    let rating = place
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "N/A".to_string());
    let reviews = place.rating_count.map(|c| format!(" ({})", c)).unwrap_or_default();
    let open = match place.open_now {
        Some(true) => " · Open",
        _ => "",
    };
    format!(
        "{}\t{}{}\t{}\t{}{}\t{}\t{}",
        place.name,
        rating,
        reviews,
        place.distance_display,
        place.price_symbol(),
        open,
        place.address,
        place.maps_url
    )
}

fn user_message(err: &ScoutError) -> String {
    match err {
        ScoutError::Auth { .. } => {
            "API key error. Check that your Google API key is valid and has the Places API enabled.".to_string()
        }
        ScoutError::BadRequest { .. } => {
            "Invalid request. The route may be too complex or the query invalid.".to_string()
        }
        ScoutError::MissingCredential => "Missing API key. Add GOOGLE_API_KEY=your_key to .env".to_string(),
        other => other.to_string(),
    }
}
