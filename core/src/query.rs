use crate::error::RouteError;
use crate::graph::FlightGraph;
use crate::metric::Metric;
use crate::network::build_default_graph;
use crate::pathfinding::find_path;
use crate::penalty::apply_weather_penalty;
use crate::planner_config::PlannerConfig;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    Found {
        path: Vec<String>,
        total_cost: f64,
        unit: &'static str,
        metric: Metric,
    },
    NotFound,
}

impl QueryResult {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found { .. })
    }
}

/// Runs one route query with the default surcharge.
///
/// Airport codes are matched exactly. When `weather_threshold` is set the
/// graph is surcharged in place before the search and stays surcharged.
pub fn query(
    graph: &mut FlightGraph,
    start: &str,
    end: &str,
    metric_token: &str,
    weather_threshold: Option<f64>,
) -> Result<QueryResult, RouteError> {
    query_with_config(
        graph,
        start,
        end,
        metric_token,
        weather_threshold,
        &PlannerConfig::default(),
    )
}

pub fn query_with_config(
    graph: &mut FlightGraph,
    start: &str,
    end: &str,
    metric_token: &str,
    weather_threshold: Option<f64>,
    config: &PlannerConfig,
) -> Result<QueryResult, RouteError> {
    // Reject bad input before the penalty touches the graph
    for airport in [start, end] {
        if !graph.has_node(airport) {
            return Err(RouteError::InvalidNode(airport.to_string()));
        }
    }
    let metric: Metric = metric_token.parse()?;

    if let Some(threshold) = weather_threshold {
        apply_weather_penalty(graph, threshold, config.weather_surcharge)?;
    }

    let result = match find_path(graph, start, end, metric.attribute())? {
        Some(found) => QueryResult::Found {
            path: found.airports,
            total_cost: found.total_cost,
            unit: metric.unit(),
            metric,
        },
        None => QueryResult::NotFound,
    };
    Ok(result)
}

/// One planning session: a graph built once plus the settings that shaped it.
pub struct RoutePlanner {
    graph: FlightGraph,
    config: PlannerConfig,
    penalty_passes: usize,
}

impl RoutePlanner {
    pub fn new(graph: FlightGraph, config: PlannerConfig) -> Self {
        Self {
            graph,
            config,
            penalty_passes: 0,
        }
    }

    /// Default network with weather drawn from `weather_rng`.
    pub fn with_rng<R: Rng>(config: PlannerConfig, weather_rng: &mut R) -> Result<Self, RouteError> {
        let graph = build_default_graph(&config, weather_rng)?;
        Ok(Self::new(graph, config))
    }

    pub fn with_seed(config: PlannerConfig, seed: u64) -> Result<Self, RouteError> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    pub fn query(
        &mut self,
        start: &str,
        end: &str,
        metric_token: &str,
        weather_threshold: Option<f64>,
    ) -> Result<QueryResult, RouteError> {
        let result = query_with_config(
            &mut self.graph,
            start,
            end,
            metric_token,
            weather_threshold,
            &self.config,
        )?;

        if weather_threshold.is_some() {
            if self.penalty_passes > 0 {
                warn!(
                    previous_passes = self.penalty_passes,
                    "weather penalty compounded on an already surcharged network"
                );
            }
            self.penalty_passes += 1;
        }
        debug!(start, end, metric_token, found = result.is_found(), "query finished");
        Ok(result)
    }

    pub fn graph(&self) -> &FlightGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Number of queries in this session that applied the weather penalty.
    pub fn penalty_passes(&self) -> usize {
        self.penalty_passes
    }
}
