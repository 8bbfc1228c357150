use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flight_paths::{
    reading_flight_graph,
    search::{
        dijkstra::Dijkstra, path::RouteRequest, weight::WeightKind, RouteFinding, SearchLimits,
    },
};

/// Finds the cheapest route between two airports under the chosen weight.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airports as a JSON array
    #[arg(short, long)]
    airports: PathBuf,
    /// Flights as a JSON array
    #[arg(short, long)]
    flights: PathBuf,
    /// IATA code of the origin airport
    #[arg(short, long)]
    origin: String,
    /// IATA code of the destination airport
    #[arg(short, long)]
    destination: String,
    /// What to minimise
    #[arg(short, long, value_enum, default_value = "price")]
    weight: WeightKind,
    /// Abort once the frontier holds more labels than this
    #[arg(long)]
    max_frontier: Option<usize>,
    /// Abort once more airports than this are settled
    #[arg(long)]
    max_settled: Option<usize>,
    /// Print the itinerary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = reading_flight_graph(&args.airports, &args.flights)
        .context("unable to load the flight network")?;

    let limits = SearchLimits {
        max_frontier_size: args.max_frontier,
        max_settled: args.max_settled,
    };
    let dijkstra = Dijkstra::with_limits(&graph, limits);
    let request = RouteRequest::new(&args.origin, &args.destination);
    let weight = args.weight.weight_function();

    match dijkstra.shortest_route(&request, weight.as_ref())? {
        Some(itinerary) if args.json => {
            println!("{}", serde_json::to_string_pretty(&itinerary)?);
        }
        Some(itinerary) => {
            println!("{}", itinerary);
            for (leg, flight) in itinerary.flights.iter().enumerate() {
                println!("{}. {}", leg + 1, flight);
            }
            println!(
                "total price ${:.2}, total flight time {} min",
                itinerary.total_price(),
                itinerary.total_duration_minutes()
            );
        }
        None => println!(
            "no route from {} to {}",
            request.origin(),
            request.destination()
        ),
    }

    Ok(())
}
