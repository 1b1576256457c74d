use flightroute_core::QueryResult;
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub metric: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_weather: Option<f64>,
    pub seed: u64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legs: Vec<JsonLeg>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonLeg {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub penalty_passes: usize,
}

pub fn create_json_output(result: &SearchResult, seed: u64) -> JsonOutput {
    let json_result = match &result.outcome {
        QueryResult::Found {
            path,
            total_cost,
            unit,
            ..
        } => JsonResult {
            found: true,
            path: Some(path.clone()),
            total_cost: Some(*total_cost),
            unit: Some(unit.to_string()),
            legs: result
                .legs
                .iter()
                .map(|leg| JsonLeg {
                    from: leg.from.clone(),
                    to: leg.to.clone(),
                    cost: leg.cost,
                })
                .collect(),
        },
        QueryResult::NotFound => JsonResult {
            found: false,
            path: None,
            total_cost: None,
            unit: None,
            legs: Vec::new(),
        },
    };

    JsonOutput {
        query: JsonQuery {
            from: result.request.from.clone(),
            to: result.request.to.clone(),
            options: JsonOptions {
                metric: result.request.metric_token.clone(),
                avoid_weather: result.request.weather_threshold,
                seed,
            },
        },
        result: json_result,
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            penalty_passes: result.penalty_passes,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
