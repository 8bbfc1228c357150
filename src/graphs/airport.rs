use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use super::{normalize_iata, AirportId};

/// An airport, the vertex type of the flight network.
///
/// Equality and hashing only look at `id`. Two airports sharing an id are the
/// same vertex even when their other fields differ.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Airport {
    id: AirportId,
    #[serde(deserialize_with = "super::deserialize_iata")]
    iata: String,
    city: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl Airport {
    pub fn new(
        id: AirportId,
        iata: &str,
        city: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
    ) -> Airport {
        Airport {
            id,
            iata: normalize_iata(iata).into_owned(),
            city: city.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn id(&self) -> AirportId {
        self.id
    }

    pub fn iata(&self) -> &str {
        &self.iata
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Airport {}

impl Hash for Airport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} [ID: {}, Coords: {:.2}, {:.2}]",
            self.iata, self.city, self.country, self.id, self.latitude, self.longitude
        )
    }
}
