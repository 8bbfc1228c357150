use ahash::{HashMap, HashMapExt};
use log::debug;

use super::{
    collections::{
        label_trail::LabelTrail,
        path_label_queue::{PathLabel, PathLabelQueue},
        settled_airports::SettledAirports,
    },
    path::{Itinerary, RouteRequest},
    weight::WeightFunction,
    RouteFinding, SearchError, SearchLimits, SearchStats,
};
use crate::graphs::{airport::Airport, flight::Flight, normalize_iata, Cost, FlightNetwork};

/// Label-setting shortest route search over a shared, read-only network.
pub struct Dijkstra<'a> {
    pub network: &'a dyn FlightNetwork,
    pub limits: SearchLimits,
}

impl<'a> Dijkstra<'a> {
    pub fn new(network: &'a dyn FlightNetwork) -> Self {
        Dijkstra {
            network,
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn with_limits(network: &'a dyn FlightNetwork, limits: SearchLimits) -> Self {
        Dijkstra { network, limits }
    }
}

impl RouteFinding for Dijkstra<'_> {
    fn shortest_route(
        &self,
        request: &RouteRequest,
        weight: &dyn WeightFunction,
    ) -> Result<Option<Itinerary>, SearchError> {
        shortest_route(self.network, request, weight, &self.limits)
    }
}

pub fn shortest_route(
    network: &dyn FlightNetwork,
    request: &RouteRequest,
    weight: &dyn WeightFunction,
    limits: &SearchLimits,
) -> Result<Option<Itinerary>, SearchError> {
    shortest_route_with_stats(network, request, weight, limits).map(|(itinerary, _)| itinerary)
}

pub fn shortest_route_with_stats(
    network: &dyn FlightNetwork,
    request: &RouteRequest,
    weight: &dyn WeightFunction,
    limits: &SearchLimits,
) -> Result<(Option<Itinerary>, SearchStats), SearchError> {
    let origin = known_airport(network, request.origin())?;
    let destination = known_airport(network, request.destination())?;

    if request.is_same_airport() {
        return Ok((Some(Itinerary::empty()), SearchStats::default()));
    }

    let mut search = LabelSetting::new(origin.iata());
    while let Some(label) = search.settle_next(limits)? {
        if label.airport == destination.iata() {
            let flights = search
                .trail
                .flights(label.trail)
                .into_iter()
                .cloned()
                .collect();
            debug!(
                "route {} -> {} found with cost {}: {:?}",
                origin.iata(),
                destination.iata(),
                label.cost,
                search.stats
            );
            let itinerary = Itinerary {
                flights,
                cost: label.cost,
            };
            return Ok((Some(itinerary), search.stats));
        }
        search.relax(network, &label, weight, limits)?;
    }

    debug!(
        "no route {} -> {}: {:?}",
        origin.iata(),
        destination.iata(),
        search.stats
    );
    Ok((None, search.stats))
}

/// Final cost of every airport reachable from `origin`, the origin itself
/// included with cost zero.
pub fn cheapest_costs_from(
    network: &dyn FlightNetwork,
    origin: &str,
    weight: &dyn WeightFunction,
    limits: &SearchLimits,
) -> Result<HashMap<String, Cost>, SearchError> {
    let origin = known_airport(network, origin)?;

    let mut costs = HashMap::new();
    let mut search = LabelSetting::new(origin.iata());
    while let Some(label) = search.settle_next(limits)? {
        costs.insert(label.airport.to_string(), label.cost);
        search.relax(network, &label, weight, limits)?;
    }

    debug!("settled {} airports from {}", costs.len(), origin.iata());
    Ok(costs)
}

fn known_airport<'g>(
    network: &'g dyn FlightNetwork,
    code: &str,
) -> Result<&'g Airport, SearchError> {
    network
        .airport(code)
        .ok_or_else(|| SearchError::UnknownAirport(normalize_iata(code).into_owned()))
}

fn checked_cost(weight: &dyn WeightFunction, flight: &Flight) -> Result<Cost, SearchError> {
    let cost = weight.cost(flight);
    if cost.is_nan() || cost < 0.0 {
        return Err(SearchError::InvalidWeight {
            flight_id: flight.id(),
            weight: cost,
        });
    }
    Ok(cost)
}

/// State owned by a single search call.
struct LabelSetting<'g> {
    frontier: PathLabelQueue<'g>,
    settled: SettledAirports<'g>,
    trail: LabelTrail<'g>,
    stats: SearchStats,
}

impl<'g> LabelSetting<'g> {
    fn new(origin: &'g str) -> Self {
        let mut frontier = PathLabelQueue::new();
        frontier.push(0.0, origin, None);

        LabelSetting {
            frontier,
            settled: SettledAirports::new(),
            trail: LabelTrail::new(),
            stats: SearchStats {
                labels_pushed: 1,
                ..SearchStats::default()
            },
        }
    }

    /// Pops labels until one reaches an unsettled airport, settles it and
    /// returns the label. `None` once the frontier is exhausted.
    fn settle_next(&mut self, limits: &SearchLimits) -> Result<Option<PathLabel<'g>>, SearchError> {
        while let Some(label) = self.frontier.pop() {
            self.stats.labels_popped += 1;
            if self.settled.settle(label.airport) {
                self.stats.stale_labels += 1;
                continue;
            }

            self.stats.airports_settled += 1;
            if let Some(max) = limits.max_settled {
                if self.settled.len() > max {
                    return Err(SearchError::LimitExceeded {
                        limit: "settled airports",
                        max,
                    });
                }
            }
            return Ok(Some(label));
        }

        Ok(None)
    }

    /// Pushes one label per outgoing flight of the label's airport.
    fn relax(
        &mut self,
        network: &'g dyn FlightNetwork,
        label: &PathLabel<'g>,
        weight: &dyn WeightFunction,
        limits: &SearchLimits,
    ) -> Result<(), SearchError> {
        for flight in network.neighbors(label.airport) {
            let cost = label.cost + checked_cost(weight, flight)?;
            let trail = self.trail.extend(label.trail, flight);
            self.frontier.push(cost, flight.destination(), Some(trail));
            self.stats.labels_pushed += 1;

            if let Some(max) = limits.max_frontier_size {
                if self.frontier.len() > max {
                    return Err(SearchError::LimitExceeded {
                        limit: "frontier labels",
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}
