use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{flight::Flight, normalize_iata, Cost};

/// Represents a request for finding a route between two airports.
///
/// Both codes are stored in canonical upper case form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteRequest {
    origin: String,
    destination: String,
}

impl RouteRequest {
    pub fn new(origin: &str, destination: &str) -> RouteRequest {
        RouteRequest {
            origin: normalize_iata(origin).into_owned(),
            destination: normalize_iata(destination).into_owned(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn is_same_airport(&self) -> bool {
        self.origin == self.destination
    }
}

/// An ordered sequence of flights from origin to destination together with
/// the total cost under the weight function used to find it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub flights: Vec<Flight>,
    pub cost: Cost,
}

impl Itinerary {
    /// The itinerary of a request whose origin equals its destination.
    pub fn empty() -> Itinerary {
        Itinerary {
            flights: Vec::new(),
            cost: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn number_of_flights(&self) -> usize {
        self.flights.len()
    }

    pub fn origin(&self) -> Option<&str> {
        self.flights.first().map(Flight::origin)
    }

    pub fn destination(&self) -> Option<&str> {
        self.flights.last().map(Flight::destination)
    }

    /// Codes of all visited airports, origin first.
    pub fn airports(&self) -> Vec<&str> {
        self.origin()
            .into_iter()
            .chain(self.flights.iter().map(Flight::destination))
            .collect()
    }

    pub fn total_price(&self) -> f64 {
        self.flights.iter().map(Flight::price).sum()
    }

    pub fn total_duration_minutes(&self) -> u32 {
        self.flights.iter().map(Flight::duration_minutes).sum()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no flights needed (cost {:.2})", self.cost);
        }
        write!(
            f,
            "{} (cost {:.2})",
            self.airports().iter().join(" -> "),
            self.cost
        )
    }
}
