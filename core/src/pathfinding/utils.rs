use rustc_hash::FxHashMap;
use serde::Serialize;

/// A found route: airports from origin to destination and the summed cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPath {
    pub airports: Vec<String>,
    pub total_cost: f64,
}

impl FlightPath {
    pub fn origin(&self) -> Option<&str> {
        self.airports.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.airports.last().map(String::as_str)
    }

    /// Consecutive airport pairs along the path.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.airports
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    pub fn stop_count(&self) -> usize {
        self.airports.len().saturating_sub(1)
    }
}

pub fn reconstruct_path(parent_map: &FxHashMap<usize, usize>, start: usize, target: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node);
        current_node = parent_map[&current_node];
    }

    path.push(start);
    path.reverse();
    path
}
