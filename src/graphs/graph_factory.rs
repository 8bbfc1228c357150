use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{airport::Airport, flight::Flight, flight_graph::FlightGraph, GraphError};
use crate::utility::get_progressspinner;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed json in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Builds flight graphs from JSON record files. Both files hold a single
/// array: airports as `{id, iata, city, country, latitude, longitude}`,
/// flights as `{id, origin, destination, airline, flight_number,
/// duration_minutes, price, departure_time}`.
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_json_files(airports: &Path, flights: &Path) -> Result<FlightGraph, LoadError> {
        let airports = Self::read_airports(airports)?;
        let flights = Self::read_flights(flights)?;

        let spinner = get_progressspinner("Building flight graph");
        let graph = FlightGraph::new(airports, flights);
        spinner.finish_and_clear();

        Ok(graph?)
    }

    pub fn read_airports(path: &Path) -> Result<Vec<Airport>, LoadError> {
        read_json_array(path, "Reading airports")
    }

    pub fn read_flights(path: &Path) -> Result<Vec<Flight>, LoadError> {
        read_json_array(path, "Reading flights")
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path, job_name: &str) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let spinner = get_progressspinner(job_name);
    let records = serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    });
    spinner.finish_and_clear();

    records
}
