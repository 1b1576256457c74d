pub mod error;
pub mod graph;
pub mod metric;
pub mod network;
pub mod pathfinding;
pub mod penalty;
pub mod planner_config;
pub mod query;

// Re-export commonly used items
pub use error::RouteError;
pub use graph::{EdgeAttribute, EdgeAttributes, FlightGraph, Route};
pub use metric::Metric;
pub use network::{
    AVERAGE_SPEED, DEFAULT_ROUTES, FUEL_CONSUMPTION_RATE, WEATHER_PENALTY_SURCHARGE,
    build_default_graph, build_initial_graph,
};
pub use pathfinding::{FlightPath, find_path};
pub use penalty::apply_weather_penalty;
pub use planner_config::PlannerConfig;
pub use query::{QueryResult, RoutePlanner, query, query_with_config};
