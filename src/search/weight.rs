use clap::ValueEnum;

use crate::graphs::{flight::Flight, Cost};

/// Maps a flight to the cost of taking it.
///
/// Implementations must be pure and must never return a negative cost; the
/// search rejects negative or NaN costs with `SearchError::InvalidWeight`.
pub trait WeightFunction: Send + Sync {
    fn cost(&self, flight: &Flight) -> Cost;
}

impl<F> WeightFunction for F
where
    F: Fn(&Flight) -> Cost + Send + Sync,
{
    fn cost(&self, flight: &Flight) -> Cost {
        self(flight)
    }
}

/// Ticket price.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriceWeight;

impl WeightFunction for PriceWeight {
    fn cost(&self, flight: &Flight) -> Cost {
        flight.price()
    }
}

/// Flight time in minutes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationWeight;

impl WeightFunction for DurationWeight {
    fn cost(&self, flight: &Flight) -> Cost {
        flight.duration_minutes() as Cost
    }
}

/// Every flight costs one, which minimises the number of legs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HopWeight;

impl WeightFunction for HopWeight {
    fn cost(&self, _flight: &Flight) -> Cost {
        1.0
    }
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    Price,
    Duration,
    Hops,
}

impl WeightKind {
    pub fn weight_function(&self) -> Box<dyn WeightFunction> {
        match self {
            WeightKind::Price => Box::new(PriceWeight),
            WeightKind::Duration => Box::new(DurationWeight),
            WeightKind::Hops => Box::new(HopWeight),
        }
    }
}
