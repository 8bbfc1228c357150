use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub mod airport;
pub mod flight;
pub mod flight_graph;
pub mod graph_factory;
pub mod graph_functions;

use airport::Airport;
use flight::Flight;

pub type AirportId = u32;
pub type FlightId = u32;
pub type Cost = f64;

/// Canonical form of an IATA code: trimmed and upper case. Borrows when the
/// code is already canonical, which is the common case during a search.
pub fn normalize_iata(code: &str) -> Cow<'_, str> {
    let trimmed = code.trim();
    if trimmed.bytes().any(|byte| byte.is_ascii_lowercase()) {
        Cow::Owned(trimmed.to_ascii_uppercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Upper-cases IATA codes while reading records.
pub(crate) fn deserialize_iata<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_iata(&raw).into_owned())
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// A flight references an airport code that is not in the registry.
    #[error("flight {flight_id} references unknown airport code {code}")]
    DataIntegrity { flight_id: FlightId, code: String },

    #[error("airport code {code} is registered twice (ids {first_id} and {second_id})")]
    DuplicateAirport {
        code: String,
        first_id: AirportId,
        second_id: AirportId,
    },

    #[error("flight {flight_id} is invalid: {reason}")]
    InvalidFlight { flight_id: FlightId, reason: String },
}

/// Read-only view of a flight network. Airports are the vertices, flights the
/// directed edges. Parallel flights between the same pair of airports are
/// kept as separate edges.
pub trait FlightNetwork: Send + Sync {
    fn airport(&self, code: &str) -> Option<&Airport>;

    /// Outgoing flights of `code` in load order. Unknown codes have no
    /// neighbors.
    fn neighbors(&self, code: &str) -> &[Flight];

    fn airports(&self) -> Box<dyn Iterator<Item = &Airport> + '_>;

    fn number_of_airports(&self) -> u32 {
        self.airports().count() as u32
    }

    fn number_of_flights(&self) -> u32 {
        self.airports()
            .map(|airport| self.neighbors(airport.iata()).len() as u32)
            .sum::<u32>()
    }

    fn contains(&self, code: &str) -> bool {
        self.airport(code).is_some()
    }
}
