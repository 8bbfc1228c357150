//! Linear-scan flight lookup by simple criteria.

use std::fmt;

use clap::ValueEnum;

use crate::graphs::{airport::Airport, flight::Flight, flight_graph::FlightGraph, normalize_iata};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Origin,
    Destination,
    Airline,
    FlightNumber,
}

/// Flights matching one criterion, plus the airport the criterion names when
/// it names a known one.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub airport: Option<Airport>,
    pub flights: Vec<Flight>,
    pub criteria: String,
}

impl SearchResult {
    pub fn has_results(&self) -> bool {
        !self.flights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Search Results ===")?;
        writeln!(f, "Search Criteria: {}", self.criteria)?;
        if let Some(airport) = &self.airport {
            writeln!(f, "Airport: {}", airport)?;
        }
        writeln!(f, "Found {} flight(s)", self.flights.len())?;
        writeln!(f, "{}", "─".repeat(57))?;

        if self.flights.is_empty() {
            writeln!(f, "No flights found matching the criteria.")?;
        }
        for (position, flight) in self.flights.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, flight)?;
        }
        Ok(())
    }
}

pub struct FlightLookup<'a> {
    flights: &'a [Flight],
    airports: &'a [Airport],
}

impl<'a> FlightLookup<'a> {
    pub fn new(flights: &'a [Flight], airports: &'a [Airport]) -> Self {
        FlightLookup { flights, airports }
    }

    pub fn from_graph(graph: &'a FlightGraph) -> Self {
        FlightLookup::new(graph.flights(), graph.airport_list())
    }

    pub fn search(&self, criterion: Criterion, value: &str) -> SearchResult {
        match criterion {
            Criterion::Origin => self.by_origin(value),
            Criterion::Destination => self.by_destination(value),
            Criterion::Airline => self.by_airline(value),
            Criterion::FlightNumber => self.by_flight_number(value),
        }
    }

    pub fn by_origin(&self, code: &str) -> SearchResult {
        let code = normalize_iata(code);
        SearchResult {
            airport: self.airport(&code),
            flights: self.matching(|flight| flight.origin() == code),
            criteria: format!("Origin: {}", code),
        }
    }

    pub fn by_destination(&self, code: &str) -> SearchResult {
        let code = normalize_iata(code);
        SearchResult {
            airport: self.airport(&code),
            flights: self.matching(|flight| flight.destination() == code),
            criteria: format!("Destination: {}", code),
        }
    }

    /// Case-insensitive substring match on the airline name.
    pub fn by_airline(&self, airline: &str) -> SearchResult {
        let needle = airline.to_lowercase();
        SearchResult {
            airport: None,
            flights: self.matching(|flight| flight.airline().to_lowercase().contains(&needle)),
            criteria: format!("Airline: {}", airline),
        }
    }

    pub fn by_flight_number(&self, flight_number: &str) -> SearchResult {
        SearchResult {
            airport: None,
            flights: self
                .matching(|flight| flight.flight_number().eq_ignore_ascii_case(flight_number)),
            criteria: format!("Flight Number: {}", flight_number),
        }
    }

    fn matching(&self, predicate: impl Fn(&Flight) -> bool) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|flight| predicate(*flight))
            .cloned()
            .collect()
    }

    fn airport(&self, code: &str) -> Option<Airport> {
        self.airports
            .iter()
            .find(|airport| airport.iata() == code)
            .cloned()
    }
}
