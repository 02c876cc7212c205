//! Xeno Invasion - Entry Point
//!
//! Parses a city map, unleashes the requested number of aliens on it, runs
//! the invasion to completion and prints what is left of the map.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use xeno_invasion::core::error::Result;
use xeno_invasion::parser;
use xeno_invasion::simulation::{run_invasion, InvasionConfig, InvasionOutcome};

/// Simulate an alien invasion over a city map
#[derive(Parser, Debug)]
#[command(name = "xeno-invasion")]
#[command(about = "Simulate an alien invasion over a city map")]
struct Args {
    /// Path to the map description file
    map_file: PathBuf,

    /// Number of aliens to unleash on the map
    aliens: usize,

    /// Random seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct InvasionReport {
    seed: u64,
    rounds: u32,
    ceiling_hit: bool,
    cities_remaining: usize,
    destroyed_cities: Vec<String>,
    aliens: Vec<AlienReport>,
    map: Vec<String>,
}

#[derive(Serialize)]
struct AlienReport {
    id: u32,
    steps: u32,
    alive: bool,
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let (map, problems) = parser::parse_file(&args.map_file)?;
    for problem in &problems {
        tracing::warn!(%problem, "map declaration conflict");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = InvasionConfig::new(args.aliens, seed);
    tracing::info!(
        seed,
        aliens = args.aliens,
        cities = map.exist_city_count(),
        "invasion starting"
    );

    let outcome = run_invasion(map, &config)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report(seed, &outcome))?);
    } else {
        for event in &outcome.events {
            println!("{event}");
        }
        println!("{}", outcome.map.dump());
    }
    Ok(())
}

fn report(seed: u64, outcome: &InvasionOutcome) -> InvasionReport {
    InvasionReport {
        seed,
        rounds: outcome.rounds,
        ceiling_hit: outcome.ceiling_hit,
        cities_remaining: outcome.map.exist_city_count(),
        destroyed_cities: outcome.events.iter().map(|e| e.city.clone()).collect(),
        aliens: outcome
            .roster
            .iter()
            .map(|a| AlienReport {
                id: a.id.0,
                steps: a.steps,
                alive: a.alive,
            })
            .collect(),
        map: outcome.map.dump().lines().map(str::to_string).collect(),
    }
}
