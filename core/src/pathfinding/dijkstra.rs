use super::utils::{FlightPath, reconstruct_path};
use crate::error::RouteError;
use crate::graph::{EdgeAttribute, FlightGraph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap};
use tracing::debug;

#[derive(Clone, Copy)]
struct DijkstraNode {
    cost: f64,
    airport: usize,
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode {}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop in airport insertion order
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.airport.cmp(&self.airport))
    }
}

struct DijkstraState {
    heap: BinaryHeap<DijkstraNode>,
    distances: FxHashMap<usize, f64>,
    parent_map: FxHashMap<usize, usize>,
    visited: FxHashSet<usize>,
}

impl DijkstraState {
    fn new(start: usize) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(DijkstraNode {
            cost: 0.0,
            airport: start,
        });
        distances.insert(start, 0.0);

        Self {
            heap,
            distances,
            parent_map: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: usize, edge_weight: f64, current_cost: f64) {
        let new_cost = current_cost + edge_weight;

        if let Some(&existing_cost) = self.distances.get(&neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        self.distances.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, current);
        self.heap.push(DijkstraNode {
            cost: new_cost,
            airport: neighbor,
        });
    }
}

/// Cheapest route from `start` to `end` using `attribute` as the edge weight.
///
/// Returns `Ok(None)` when the two airports are not connected.
pub fn find_path(
    graph: &FlightGraph,
    start: &str,
    end: &str,
    attribute: EdgeAttribute,
) -> Result<Option<FlightPath>, RouteError> {
    let start_index = graph
        .node_index(start)
        .ok_or_else(|| RouteError::InvalidNode(start.to_string()))?;
    let end_index = graph
        .node_index(end)
        .ok_or_else(|| RouteError::InvalidNode(end.to_string()))?;

    let mut state = DijkstraState::new(start_index);

    while let Some(DijkstraNode {
        cost,
        airport: current,
    }) = state.heap.pop()
    {
        if current == end_index {
            let airports = reconstruct_path(&state.parent_map, start_index, end_index)
                .into_iter()
                .map(|index| graph.airport_name(index).to_string())
                .collect();
            debug!(
                start,
                end,
                %attribute,
                cost,
                settled = state.visited.len(),
                "route found"
            );
            return Ok(Some(FlightPath {
                airports,
                total_cost: cost,
            }));
        }

        if !state.visited.insert(current) {
            continue;
        }

        for (neighbor, attributes) in graph.connections(current) {
            if state.visited.contains(&neighbor) {
                continue;
            }
            state.visit_neighbor(neighbor, current, attributes.get(attribute), cost);
        }
    }

    debug!(start, end, %attribute, settled = state.visited.len(), "no route");
    Ok(None)
}
