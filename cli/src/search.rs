use flightroute_core::{QueryResult, RoutePlanner, RouteError};
use std::time::Instant;

use crate::args::Args;
use crate::string_normalization::normalize_airport_code;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub from: String,
    pub to: String,
    pub metric_token: String,
    pub weather_threshold: Option<f64>,
}

/// One leg of a found route with its cost under the searched metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

pub struct SearchResult {
    pub request: SearchRequest,
    pub outcome: QueryResult,
    pub legs: Vec<Leg>,
    pub search_duration: f64,
    pub penalty_passes: usize,
}

pub fn create_search_request(args: &Args) -> Result<SearchRequest, String> {
    let (from, to) = match (&args.from, &args.to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err("Both a starting and a destination airport are required".to_string()),
    };

    Ok(SearchRequest {
        from: normalize_airport_code(from),
        to: normalize_airport_code(to),
        metric_token: args.metric.trim().to_lowercase(),
        weather_threshold: args.avoid_weather,
    })
}

/// Blank input means no threshold.
pub fn parse_weather_threshold(input: &str) -> Result<Option<f64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_weather_score(trimmed).map(Some)
}

/// Finite weather score, shared by `--avoid-weather` and session lines.
pub fn parse_weather_score(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(format!("Weather threshold must be a number, got '{}'", trimmed)),
    }
}

pub fn execute_search(planner: &mut RoutePlanner, request: SearchRequest) -> Result<SearchResult, RouteError> {
    let search_timer = Instant::now();

    let outcome = planner.query(
        &request.from,
        &request.to,
        &request.metric_token,
        request.weather_threshold,
    )?;

    let legs = match &outcome {
        QueryResult::Found { path, metric, .. } => path
            .windows(2)
            .map(|pair| {
                let cost = planner
                    .graph()
                    .get_edge_attribute(&pair[0], &pair[1], metric.attribute())?;
                Ok(Leg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    cost,
                })
            })
            .collect::<Result<Vec<_>, RouteError>>()?,
        QueryResult::NotFound => Vec::new(),
    };

    Ok(SearchResult {
        request,
        outcome,
        legs,
        search_duration: search_timer.elapsed().as_secs_f64(),
        penalty_passes: planner.penalty_passes(),
    })
}
