use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flight_paths::{
    graphs::graph_factory::GraphFactory,
    lookup::{Criterion, FlightLookup},
};

/// Lists all flights matching one criterion.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airports as a JSON array
    #[arg(short, long)]
    airports: PathBuf,
    /// Flights as a JSON array
    #[arg(short, long)]
    flights: PathBuf,
    /// Field to match against
    #[arg(short, long, value_enum)]
    by: Criterion,
    /// Airport code, airline name fragment or flight number
    value: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The lookup scans the raw records and does not need a validated graph.
    let airports = GraphFactory::read_airports(&args.airports).context("unable to load airports")?;
    let flights = GraphFactory::read_flights(&args.flights).context("unable to load flights")?;

    let lookup = FlightLookup::new(&flights, &airports);
    print!("{}", lookup.search(args.by, &args.value));

    Ok(())
}
