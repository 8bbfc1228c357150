mod common;

use common::{airport, flight, scenario_airports, scenario_flights, scenario_graph};
use flight_paths::{
    graphs::{flight::Flight, flight_graph::FlightGraph, graph_functions::validate_itinerary},
    search::{
        dijkstra::{cheapest_costs_from, shortest_route, shortest_route_with_stats, Dijkstra},
        path::{Itinerary, RouteRequest},
        weight::{DurationWeight, HopWeight, PriceWeight, WeightFunction},
        RouteFinding, SearchError, SearchLimits, SearchStats,
    },
};
use rayon::prelude::*;

fn flight_ids(itinerary: &Itinerary) -> Vec<u32> {
    itinerary.flights.iter().map(Flight::id).collect()
}

fn route(
    graph: &FlightGraph,
    origin: &str,
    destination: &str,
    weight: &dyn WeightFunction,
) -> Result<Option<Itinerary>, SearchError> {
    let request = RouteRequest::new(origin, destination);
    shortest_route(graph, &request, weight, &SearchLimits::unbounded())
}

#[test]
fn price_search_prefers_cheaper_connection() {
    let graph = scenario_graph();
    let itinerary = route(&graph, "VIE", "JFK", &PriceWeight).unwrap().unwrap();

    assert_eq!(flight_ids(&itinerary), vec![1, 2]);
    assert_eq!(itinerary.cost, 500.0);
    assert_eq!(itinerary.airports(), vec!["VIE", "LHR", "JFK"]);

    let request = RouteRequest::new("VIE", "JFK");
    assert_eq!(
        validate_itinerary(&graph, &request, &itinerary, &PriceWeight),
        Ok(())
    );
}

#[test]
fn duration_search_compares_summed_duration() {
    let graph = scenario_graph();
    let itinerary = route(&graph, "VIE", "JFK", &DurationWeight).unwrap().unwrap();
    assert_eq!(flight_ids(&itinerary), vec![1, 2]);
    assert_eq!(itinerary.cost, 570.0);

    // A direct flight shorter than both legs together wins.
    let mut flights = scenario_flights();
    flights[2] = flight(3, "VIE", "JFK", 900.0, 500);
    let graph = FlightGraph::new(scenario_airports(), flights).unwrap();
    let itinerary = route(&graph, "VIE", "JFK", &DurationWeight).unwrap().unwrap();
    assert_eq!(flight_ids(&itinerary), vec![3]);
    assert_eq!(itinerary.cost, 500.0);
}

#[test]
fn hop_search_takes_direct_flight() {
    let graph = scenario_graph();
    let itinerary = route(&graph, "VIE", "JFK", &HopWeight).unwrap().unwrap();
    assert_eq!(flight_ids(&itinerary), vec![3]);
    assert_eq!(itinerary.cost, 1.0);
}

#[test]
fn unknown_airport_fails_fast() {
    let graph = scenario_graph();
    assert_eq!(
        route(&graph, "VIE", "ZZZ", &PriceWeight),
        Err(SearchError::UnknownAirport("ZZZ".to_string()))
    );
    assert_eq!(
        route(&graph, "zzz", "JFK", &PriceWeight),
        Err(SearchError::UnknownAirport("ZZZ".to_string()))
    );
    assert_eq!(
        route(&graph, "ZZZ", "ZZZ", &PriceWeight),
        Err(SearchError::UnknownAirport("ZZZ".to_string()))
    );
}

#[test]
fn unknown_airport_is_not_traversed() {
    let graph = scenario_graph();
    let never_called = |_: &Flight| -> f64 { panic!("no edge may be weighed") };
    let result = route(&graph, "VIE", "ZZZ", &never_called);
    assert!(matches!(result, Err(SearchError::UnknownAirport(_))));
}

#[test]
fn parallel_flights_are_relaxed_independently() {
    let mut flights = scenario_flights();
    flights.insert(0, flight(4, "VIE", "LHR", 250.0, 140));
    let graph = FlightGraph::new(scenario_airports(), flights).unwrap();

    let itinerary = route(&graph, "VIE", "JFK", &PriceWeight).unwrap().unwrap();
    assert_eq!(flight_ids(&itinerary), vec![1, 2]);
    assert_eq!(itinerary.cost, 500.0);

    // The same pair of airports, but the other parallel flight is faster.
    let itinerary = route(&graph, "VIE", "LHR", &DurationWeight).unwrap().unwrap();
    assert_eq!(flight_ids(&itinerary), vec![4]);
}

#[test]
fn same_airport_needs_no_flights() {
    let graph = scenario_graph();
    let never_called = |_: &Flight| -> f64 { panic!("no edge may be weighed") };

    let itinerary = route(&graph, "vie", "VIE", &never_called).unwrap().unwrap();
    assert_eq!(itinerary, Itinerary::empty());
    assert_eq!(itinerary.cost, 0.0);
    assert!(itinerary.flights.is_empty());
}

#[test]
fn disconnected_airports_have_no_route() {
    let mut airports = scenario_airports();
    airports.push(airport(4, "CDG"));
    let graph = FlightGraph::new(airports, scenario_flights()).unwrap();

    // Flights are directed: nothing departs from New York.
    assert_eq!(route(&graph, "JFK", "VIE", &PriceWeight), Ok(None));
    assert_eq!(route(&graph, "VIE", "CDG", &PriceWeight), Ok(None));
}

#[test]
fn codes_are_case_insensitive() {
    let graph = scenario_graph();
    let itinerary = route(&graph, "vie", "jFk", &PriceWeight).unwrap().unwrap();
    assert_eq!(itinerary.cost, 500.0);
}

#[test]
fn negative_weight_is_rejected() {
    let graph = scenario_graph();
    let refund = |flight: &Flight| -flight.price();
    assert_eq!(
        route(&graph, "VIE", "JFK", &refund),
        Err(SearchError::InvalidWeight {
            flight_id: 1,
            weight: -200.0
        })
    );

    let undefined = |_: &Flight| f64::NAN;
    assert!(matches!(
        route(&graph, "VIE", "JFK", &undefined),
        Err(SearchError::InvalidWeight { flight_id: 1, .. })
    ));
}

#[test]
fn zero_weights_are_allowed() {
    let graph = scenario_graph();
    let free = |_: &Flight| 0.0;
    let itinerary = route(&graph, "VIE", "JFK", &free).unwrap().unwrap();
    assert_eq!(itinerary.cost, 0.0);
    assert_eq!(itinerary.destination(), Some("JFK"));
}

#[test]
fn limits_abort_the_search() {
    let graph = scenario_graph();
    let request = RouteRequest::new("VIE", "JFK");

    let settled = SearchLimits::unbounded().with_max_settled(1);
    assert_eq!(
        shortest_route(&graph, &request, &PriceWeight, &settled),
        Err(SearchError::LimitExceeded {
            limit: "settled airports",
            max: 1
        })
    );

    let frontier = SearchLimits::unbounded().with_max_frontier_size(1);
    assert_eq!(
        shortest_route(&graph, &request, &PriceWeight, &frontier),
        Err(SearchError::LimitExceeded {
            limit: "frontier labels",
            max: 1
        })
    );

    let generous = SearchLimits::unbounded()
        .with_max_settled(3)
        .with_max_frontier_size(3);
    let cost = Dijkstra::with_limits(&graph, generous)
        .shortest_route_cost(&request, &PriceWeight)
        .unwrap();
    assert_eq!(cost, Some(500.0));
}

#[test]
fn stats_count_labels() {
    let graph = scenario_graph();
    let request = RouteRequest::new("VIE", "JFK");
    let (_, stats) =
        shortest_route_with_stats(&graph, &request, &PriceWeight, &SearchLimits::unbounded())
            .unwrap();

    assert_eq!(
        stats,
        SearchStats {
            labels_pushed: 4,
            labels_popped: 3,
            stale_labels: 0,
            airports_settled: 3,
        }
    );
}

#[test]
fn stale_labels_are_skipped() {
    let airports = vec![
        airport(1, "AAA"),
        airport(2, "BBB"),
        airport(3, "CCC"),
        airport(4, "DDD"),
    ];
    let flights = vec![
        flight(1, "AAA", "BBB", 10.0, 60),
        flight(2, "AAA", "CCC", 1.0, 60),
        flight(3, "CCC", "BBB", 1.0, 60),
        flight(4, "BBB", "DDD", 100.0, 60),
    ];
    let graph = FlightGraph::new(airports, flights).unwrap();
    let request = RouteRequest::new("AAA", "DDD");

    let (itinerary, stats) =
        shortest_route_with_stats(&graph, &request, &PriceWeight, &SearchLimits::unbounded())
            .unwrap();
    let itinerary = itinerary.unwrap();

    assert_eq!(flight_ids(&itinerary), vec![2, 3, 4]);
    assert_eq!(itinerary.cost, 102.0);
    assert_eq!(stats.stale_labels, 1);
    assert_eq!(stats.airports_settled, 4);
}

#[test]
fn cheapest_costs_cover_reachable_airports() {
    let graph = scenario_graph();
    let costs =
        cheapest_costs_from(&graph, "vie", &PriceWeight, &SearchLimits::unbounded()).unwrap();

    assert_eq!(costs.len(), 3);
    assert_eq!(costs.get("VIE"), Some(&0.0));
    assert_eq!(costs.get("LHR"), Some(&200.0));
    assert_eq!(costs.get("JFK"), Some(&500.0));

    let from_new_york =
        cheapest_costs_from(&graph, "JFK", &PriceWeight, &SearchLimits::unbounded()).unwrap();
    assert_eq!(from_new_york.len(), 1);
}

#[test]
fn cheapest_costs_report_unknown_codes_upper_case() {
    let graph = scenario_graph();
    assert_eq!(
        cheapest_costs_from(&graph, " zzz", &PriceWeight, &SearchLimits::unbounded()),
        Err(SearchError::UnknownAirport("ZZZ".to_string()))
    );
}

#[test]
fn concurrent_queries_share_one_graph() {
    let graph = scenario_graph();
    let dijkstra = Dijkstra::new(&graph);
    let request = RouteRequest::new("VIE", "JFK");

    let costs: Vec<Option<f64>> = (0..64)
        .into_par_iter()
        .map(|_| dijkstra.shortest_route_cost(&request, &PriceWeight).unwrap())
        .collect();

    assert!(costs.iter().all(|cost| *cost == Some(500.0)));
}
