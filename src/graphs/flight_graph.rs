use std::ops::Range;

use ahash::{HashMap, HashMapExt};
use log::{debug, info};

use super::{airport::Airport, flight::Flight, normalize_iata, FlightNetwork, GraphError};

/// Adjacency representation of a flight network.
///
/// All flights live in one vector grouped by origin airport; each airport maps
/// to the range of its departures inside that vector. Within one origin the
/// flights keep their load order. The graph has no mutation api, so a built
/// graph can be shared between any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct FlightGraph {
    airports: Vec<Airport>,
    airport_index: HashMap<String, usize>,
    flights: Vec<Flight>,
    departures: Vec<Range<usize>>,
}

impl FlightGraph {
    /// Builds the graph in one pass over `flights`. Fails without building
    /// anything if a flight references an unknown airport, carries a
    /// non-positive duration or a negative price, or if two airports share a
    /// code.
    pub fn new(airports: Vec<Airport>, flights: Vec<Flight>) -> Result<FlightGraph, GraphError> {
        let mut airport_index = HashMap::with_capacity(airports.len());
        for (index, airport) in airports.iter().enumerate() {
            if let Some(&previous) = airport_index.get(airport.iata()) {
                let previous: &Airport = &airports[previous];
                return Err(GraphError::DuplicateAirport {
                    code: airport.iata().to_string(),
                    first_id: previous.id(),
                    second_id: airport.id(),
                });
            }
            airport_index.insert(airport.iata().to_string(), index);
        }

        let number_of_flights = flights.len();
        let mut buckets: Vec<Vec<Flight>> = vec![Vec::new(); airports.len()];
        for flight in flights {
            validate_flight(&flight)?;
            let origin = *airport_index.get(flight.origin()).ok_or_else(|| {
                GraphError::DataIntegrity {
                    flight_id: flight.id(),
                    code: flight.origin().to_string(),
                }
            })?;
            if !airport_index.contains_key(flight.destination()) {
                return Err(GraphError::DataIntegrity {
                    flight_id: flight.id(),
                    code: flight.destination().to_string(),
                });
            }
            buckets[origin].push(flight);
        }

        let mut flights = Vec::with_capacity(number_of_flights);
        let mut departures = Vec::with_capacity(airports.len());
        for bucket in buckets {
            let start = flights.len();
            flights.extend(bucket);
            departures.push(start..flights.len());
        }

        info!(
            "built flight graph with {} airports and {} flights",
            airports.len(),
            flights.len()
        );

        Ok(FlightGraph {
            airports,
            airport_index,
            flights,
            departures,
        })
    }

    /// All flights, grouped by origin airport.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Airports in registration order.
    pub fn airport_list(&self) -> &[Airport] {
        &self.airports
    }

    fn index_of(&self, code: &str) -> Option<usize> {
        let code = normalize_iata(code);
        let index = self.airport_index.get(code.as_ref()).copied();
        if index.is_none() {
            debug!("airport {} is not part of the graph", code);
        }
        index
    }
}

fn validate_flight(flight: &Flight) -> Result<(), GraphError> {
    if flight.duration_minutes() == 0 {
        return Err(GraphError::InvalidFlight {
            flight_id: flight.id(),
            reason: "duration must be positive".to_string(),
        });
    }
    if !flight.price().is_finite() || flight.price() < 0.0 {
        return Err(GraphError::InvalidFlight {
            flight_id: flight.id(),
            reason: format!("price {} is not a non-negative number", flight.price()),
        });
    }
    Ok(())
}

impl FlightNetwork for FlightGraph {
    fn airport(&self, code: &str) -> Option<&Airport> {
        self.index_of(code).map(|index| &self.airports[index])
    }

    fn neighbors(&self, code: &str) -> &[Flight] {
        match self.index_of(code) {
            Some(index) => &self.flights[self.departures[index].clone()],
            None => &[],
        }
    }

    fn airports(&self) -> Box<dyn Iterator<Item = &Airport> + '_> {
        Box::new(self.airports.iter())
    }

    fn number_of_airports(&self) -> u32 {
        self.airports.len() as u32
    }

    fn number_of_flights(&self) -> u32 {
        self.flights.len() as u32
    }
}
