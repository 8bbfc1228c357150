use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flight_paths::{
    reading_flight_graph,
    search::{dijkstra::Dijkstra, weight::WeightKind},
    utility::{benchmark, random_requests},
};
use log::info;

/// Runs random route queries in parallel against one shared network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airports as a JSON array
    #[arg(short, long)]
    airports: PathBuf,
    /// Flights as a JSON array
    #[arg(short, long)]
    flights: PathBuf,
    /// Number of random origin/destination pairs
    #[arg(short, long, default_value = "1000")]
    number_of_queries: u32,
    /// What to minimise
    #[arg(short, long, value_enum, default_value = "price")]
    weight: WeightKind,
    /// Seed for drawing the pairs
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = reading_flight_graph(&args.airports, &args.flights)
        .context("unable to load the flight network")?;

    let requests = random_requests(&graph, args.number_of_queries, args.seed);
    info!("generated {} requests", requests.len());

    let dijkstra = Dijkstra::new(&graph);
    let weight = args.weight.weight_function();
    let report = benchmark(&dijkstra, &requests, weight.as_ref())?;

    println!(
        "average search took {:?} ({} routes found, {} without route)",
        report.average_duration, report.routes_found, report.routes_missing
    );

    Ok(())
}
