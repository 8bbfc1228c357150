use std::path::Path;

use graphs::{
    flight_graph::FlightGraph,
    graph_factory::{GraphFactory, LoadError},
};
use log::info;

pub mod graphs;
pub mod lookup;
pub mod search;
pub mod utility;

/// Loads the airport and flight JSON files and builds the network.
pub fn reading_flight_graph(airports: &Path, flights: &Path) -> Result<FlightGraph, LoadError> {
    info!(
        "loading airports from {} and flights from {}",
        airports.display(),
        flights.display()
    );
    GraphFactory::from_json_files(airports, flights)
}
