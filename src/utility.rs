use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rayon::prelude::*;

use crate::{
    graphs::FlightNetwork,
    search::{path::RouteRequest, weight::WeightFunction, RouteFinding, SearchError},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Draws `number_of_requests` origin/destination pairs with distinct
/// airports. Deterministic for a given `seed`.
pub fn random_requests(
    network: &dyn FlightNetwork,
    number_of_requests: u32,
    seed: u64,
) -> Vec<RouteRequest> {
    let codes: Vec<&str> = network.airports().map(|airport| airport.iata()).collect();
    if codes.len() < 2 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..number_of_requests)
        .filter_map(|_| {
            let pair: Vec<&&str> = codes.choose_multiple(&mut rng, 2).collect();
            match pair.as_slice() {
                [origin, destination] => Some(RouteRequest::new(origin, destination)),
                _ => None,
            }
        })
        .collect()
}

pub struct BenchmarkReport {
    pub average_duration: Duration,
    pub routes_found: usize,
    pub routes_missing: usize,
}

/// Runs all `requests` in parallel against one shared path finder.
pub fn benchmark(
    path_finder: &dyn RouteFinding,
    requests: &[RouteRequest],
    weight: &dyn WeightFunction,
) -> Result<BenchmarkReport, SearchError> {
    let bar = get_progressbar("Searching routes", requests.len() as u64);
    let results = requests
        .par_iter()
        .progress_with(bar)
        .map(|request| -> Result<(Duration, bool), SearchError> {
            let start = Instant::now();
            let route = path_finder.shortest_route(request, weight)?;
            Ok((start.elapsed(), route.is_some()))
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    let total: Duration = results.iter().map(|(duration, _)| *duration).sum();
    let routes_found = results.iter().filter(|(_, found)| *found).count();
    Ok(BenchmarkReport {
        average_duration: total / results.len().max(1) as u32,
        routes_found,
        routes_missing: results.len() - routes_found,
    })
}
