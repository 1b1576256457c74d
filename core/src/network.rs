use crate::error::RouteError;
use crate::graph::FlightGraph;
use crate::planner_config::PlannerConfig;
use rand::Rng;
use tracing::info;

pub const FUEL_CONSUMPTION_RATE: f64 = 0.05;
pub const AVERAGE_SPEED: f64 = 850.0;
pub const WEATHER_PENALTY_SURCHARGE: f64 = 10.0;

pub const MIN_WEATHER_SCORE: f64 = 1.0;
pub const MAX_WEATHER_SCORE: f64 = 10.0;

/// Route definition: two airport codes and the distance between them in km.
pub type RouteSpec = (&'static str, &'static str, f64);

pub const DEFAULT_ROUTES: [RouteSpec; 15] = [
    ("JFK", "LAX", 3983.0),
    ("JFK", "ORD", 1180.0),
    ("ORD", "DFW", 1291.0),
    ("DFW", "LAX", 1984.0),
    ("MIA", "JFK", 1750.0),
    ("ATL", "JFK", 760.0),
    ("LAX", "SEA", 954.0),
    ("ORD", "MIA", 1190.0),
    ("DEN", "DFW", 620.0),
    ("BOS", "LAX", 2610.0),
    ("SEA", "SFO", 679.0),
    ("SFO", "ORD", 1846.0),
    ("PHX", "LAX", 370.0),
    ("IAH", "ORD", 925.0),
    ("DFW", "ATL", 730.0),
];

/// Builds the network from `routes`, deriving fuel and time from each
/// distance once and drawing a weather score uniformly from [1, 10].
pub fn build_initial_graph<R: Rng>(
    routes: &[RouteSpec],
    fuel_rate: f64,
    avg_speed: f64,
    weather_rng: &mut R,
) -> Result<FlightGraph, RouteError> {
    let mut graph = FlightGraph::new();

    for &(from, to, distance) in routes {
        let weather = weather_rng.random_range(MIN_WEATHER_SCORE..=MAX_WEATHER_SCORE);
        graph.add_edge(
            from,
            to,
            distance,
            distance * fuel_rate,
            distance / avg_speed,
            weather,
        )?;
    }

    info!(
        airports = graph.node_count(),
        routes = graph.edge_count(),
        "built flight network"
    );
    Ok(graph)
}

pub fn build_default_graph<R: Rng>(
    config: &PlannerConfig,
    weather_rng: &mut R,
) -> Result<FlightGraph, RouteError> {
    build_initial_graph(
        &DEFAULT_ROUTES,
        config.fuel_consumption_rate,
        config.average_speed,
        weather_rng,
    )
}
