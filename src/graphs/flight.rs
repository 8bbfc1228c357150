use std::{
    fmt,
    hash::{Hash, Hasher},
};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{normalize_iata, FlightId};

/// A scheduled flight, the directed edge `origin -> destination` of the
/// flight network.
///
/// Equality and hashing only look at `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flight {
    id: FlightId,
    #[serde(deserialize_with = "super::deserialize_iata")]
    origin: String,
    #[serde(deserialize_with = "super::deserialize_iata")]
    destination: String,
    airline: String,
    flight_number: String,
    duration_minutes: u32,
    price: f64,
    #[serde(with = "time_of_day")]
    departure_time: NaiveTime,
}

impl Flight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: FlightId,
        origin: &str,
        destination: &str,
        airline: &str,
        flight_number: &str,
        duration_minutes: u32,
        price: f64,
        departure_time: NaiveTime,
    ) -> Flight {
        Flight {
            id,
            origin: normalize_iata(origin).into_owned(),
            destination: normalize_iata(destination).into_owned(),
            airline: airline.to_string(),
            flight_number: flight_number.to_string(),
            duration_minutes,
            price,
            departure_time,
        }
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn departure_time(&self) -> NaiveTime {
        self.departure_time
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flight {}

impl Hash for Flight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} [ID: {}] - {} → {} | {} | Duration: {} min | Price: ${:.2} | Departs: {}",
            self.flight_number,
            self.id,
            self.origin,
            self.destination,
            self.airline,
            self.duration_minutes,
            self.price,
            self.departure_time.format("%H:%M")
        )
    }
}

/// Departure times are written as `HH:MM`; `HH:MM:SS` is accepted on input.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
            .map_err(|err| D::Error::custom(format!("invalid departure time {raw:?}: {err}")))
    }
}
