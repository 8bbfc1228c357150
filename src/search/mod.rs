use thiserror::Error;

use crate::graphs::{Cost, FlightId};

pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod weight;

use path::{Itinerary, RouteRequest};
use weight::WeightFunction;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("unknown airport {0}")]
    UnknownAirport(String),

    /// The weight function produced a negative or NaN cost.
    #[error("weight function returned invalid cost {weight} for flight {flight_id}")]
    InvalidWeight { flight_id: FlightId, weight: Cost },

    #[error("search aborted, {limit} exceeded {max}")]
    LimitExceeded { limit: &'static str, max: usize },
}

/// Optional guards against pathological inputs. Both are unbounded by
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of labels waiting in the frontier.
    pub max_frontier_size: Option<usize>,
    /// Maximum number of airports settled before giving up.
    pub max_settled: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        SearchLimits::default()
    }

    pub fn with_max_frontier_size(mut self, max: usize) -> Self {
        self.max_frontier_size = Some(max);
        self
    }

    pub fn with_max_settled(mut self, max: usize) -> Self {
        self.max_settled = Some(max);
        self
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub labels_pushed: u64,
    pub labels_popped: u64,
    /// Popped labels whose airport had already been settled.
    pub stale_labels: u64,
    pub airports_settled: u64,
}

pub trait RouteFinding: Send + Sync {
    /// Cheapest itinerary for `request`. `Ok(None)` means both airports exist
    /// but no route connects them.
    fn shortest_route(
        &self,
        request: &RouteRequest,
        weight: &dyn WeightFunction,
    ) -> Result<Option<Itinerary>, SearchError>;

    fn shortest_route_cost(
        &self,
        request: &RouteRequest,
        weight: &dyn WeightFunction,
    ) -> Result<Option<Cost>, SearchError> {
        Ok(self
            .shortest_route(request, weight)?
            .map(|itinerary| itinerary.cost))
    }
}
