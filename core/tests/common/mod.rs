#![allow(dead_code)]

use flightroute_core::{FUEL_CONSUMPTION_RATE, FlightGraph, AVERAGE_SPEED};
use rand::{SeedableRng, rngs::StdRng};

pub const SEED: u64 = 42;

/// Builds a graph from (from, to, distance, weather) tuples, deriving fuel
/// and time the same way the default network does.
pub fn graph_from(routes: &[(&str, &str, f64, f64)]) -> FlightGraph {
    let mut graph = FlightGraph::new();
    for &(from, to, distance, weather) in routes {
        graph
            .add_edge(
                from,
                to,
                distance,
                distance * FUEL_CONSUMPTION_RATE,
                distance / AVERAGE_SPEED,
                weather,
            )
            .unwrap();
    }
    graph
}

/// JFK-ORD-DFW-LAX corridor plus the direct JFK-LAX route.
///
/// Weather: JFK-LAX 8.0, JFK-ORD 3.0, ORD-DFW 6.5, DFW-LAX 2.0
pub fn corridor_graph() -> FlightGraph {
    graph_from(&[
        ("JFK", "ORD", 1180.0, 3.0),
        ("ORD", "DFW", 1291.0, 6.5),
        ("JFK", "LAX", 3983.0, 8.0),
        ("DFW", "LAX", 1984.0, 2.0),
    ])
}

/// Two islands: JFK-BOS and LAX-SFO.
pub fn split_graph() -> FlightGraph {
    graph_from(&[("JFK", "BOS", 300.0, 2.0), ("LAX", "SFO", 540.0, 4.0)])
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn default_graph() -> FlightGraph {
    flightroute_core::build_default_graph(&Default::default(), &mut seeded_rng()).unwrap()
}
