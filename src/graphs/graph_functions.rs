use super::{flight::Flight, Cost, FlightNetwork};
use crate::search::{
    path::{Itinerary, RouteRequest},
    weight::WeightFunction,
};

/// Sum of `weight` over `flights`, accumulated in travel order.
pub fn itinerary_cost<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    weight: &dyn WeightFunction,
) -> Cost {
    flights
        .into_iter()
        .fold(0.0, |cost, flight| cost + weight.cost(flight))
}

/// Check if an itinerary is a valid answer to `request` in `network`.
pub fn validate_itinerary(
    network: &dyn FlightNetwork,
    request: &RouteRequest,
    itinerary: &Itinerary,
    weight: &dyn WeightFunction,
) -> Result<(), String> {
    if itinerary.is_empty() {
        if !request.is_same_airport() {
            return Err("itinerary is empty".to_string());
        }
        if itinerary.cost != 0.0 {
            return Err(format!("empty itinerary has cost {}", itinerary.cost));
        }
        return Ok(());
    }

    // Ensure first and last airport of the itinerary are origin and destination of the request.
    if itinerary.origin() != Some(request.origin()) {
        return Err("first flight does not depart from the origin".to_string());
    }
    if itinerary.destination() != Some(request.destination()) {
        return Err("last flight does not arrive at the destination".to_string());
    }

    // Check that consecutive flights connect and exist in the network.
    for flight in itinerary.flights.iter() {
        if !network
            .neighbors(flight.origin())
            .iter()
            .any(|edge| edge.id() == flight.id())
        {
            return Err(format!("flight {} is not part of the network", flight.id()));
        }
    }
    for (arriving, departing) in itinerary.flights.iter().zip(itinerary.flights.iter().skip(1)) {
        if arriving.destination() != departing.origin() {
            return Err(format!(
                "flight {} arrives at {} but flight {} departs from {}",
                arriving.id(),
                arriving.destination(),
                departing.id(),
                departing.origin()
            ));
        }
    }

    // Check if total cost of the itinerary is correct.
    let true_cost = itinerary_cost(&itinerary.flights, weight);
    if itinerary.cost != true_cost {
        return Err(format!(
            "itinerary claims cost {} but its flights cost {}",
            itinerary.cost, true_cost
        ));
    }

    Ok(())
}
