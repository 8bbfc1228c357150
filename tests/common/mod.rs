#![allow(dead_code)]

use chrono::NaiveTime;
use flight_paths::graphs::{airport::Airport, flight::Flight, flight_graph::FlightGraph};

pub fn departure(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn airport(id: u32, code: &str) -> Airport {
    Airport::new(id, code, "City", "Country", 0.0, 0.0)
}

pub fn flight(id: u32, origin: &str, destination: &str, price: f64, duration: u32) -> Flight {
    Flight::new(
        id,
        origin,
        destination,
        "Test Air",
        &format!("TA{}", id),
        duration,
        price,
        departure(8, 0),
    )
}

pub fn scenario_airports() -> Vec<Airport> {
    vec![
        Airport::new(1, "VIE", "Vienna", "Austria", 48.11, 16.57),
        Airport::new(2, "JFK", "New York", "USA", 40.64, -73.78),
        Airport::new(3, "LHR", "London", "United Kingdom", 51.47, -0.45),
    ]
}

pub fn scenario_flights() -> Vec<Flight> {
    vec![
        flight(1, "VIE", "LHR", 200.0, 150),
        flight(2, "LHR", "JFK", 300.0, 420),
        flight(3, "VIE", "JFK", 900.0, 600),
    ]
}

/// Vienna, London and New York with a cheap two-leg route and an expensive
/// direct flight.
pub fn scenario_graph() -> FlightGraph {
    FlightGraph::new(scenario_airports(), scenario_flights()).unwrap()
}
