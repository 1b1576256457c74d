use crate::error::RouteError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of one of the four cost attributes every route carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeAttribute {
    Distance,
    Fuel,
    Time,
    Weather,
}

impl EdgeAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeAttribute::Distance => "distance",
            EdgeAttribute::Fuel => "fuel",
            EdgeAttribute::Time => "time",
            EdgeAttribute::Weather => "weather",
        }
    }
}

impl fmt::Display for EdgeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost attributes of a single route.
///
/// `fuel` and `time` are snapshots taken from the distance at construction
/// time and are never recomputed when `distance` is later surcharged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    pub distance: f64,
    pub fuel: f64,
    pub time: f64,
    pub weather: f64,
}

impl EdgeAttributes {
    pub fn new(distance: f64, fuel: f64, time: f64, weather: f64) -> Self {
        Self {
            distance,
            fuel,
            time,
            weather,
        }
    }

    pub fn get(&self, key: EdgeAttribute) -> f64 {
        match key {
            EdgeAttribute::Distance => self.distance,
            EdgeAttribute::Fuel => self.fuel,
            EdgeAttribute::Time => self.time,
            EdgeAttribute::Weather => self.weather,
        }
    }

    fn slot_mut(&mut self, key: EdgeAttribute) -> &mut f64 {
        match key {
            EdgeAttribute::Distance => &mut self.distance,
            EdgeAttribute::Fuel => &mut self.fuel,
            EdgeAttribute::Time => &mut self.time,
            EdgeAttribute::Weather => &mut self.weather,
        }
    }

    fn validate(&self) -> Result<(), RouteError> {
        [
            EdgeAttribute::Distance,
            EdgeAttribute::Fuel,
            EdgeAttribute::Time,
            EdgeAttribute::Weather,
        ]
        .into_iter()
        .try_for_each(|key| validate_value(key, self.get(key)))
    }
}

pub(crate) fn validate_value(attribute: EdgeAttribute, value: f64) -> Result<(), RouteError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidAttributeValue { attribute, value })
    }
}

/// An undirected route between two airports, as yielded by [`FlightGraph::all_edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub attributes: EdgeAttributes,
}

struct StoredRoute {
    from: usize,
    to: usize,
    attributes: EdgeAttributes,
}

/// Undirected flight network: airports plus at most one route per airport pair.
///
/// Airport codes are stored exactly as given; callers normalize casing.
#[derive(Default)]
pub struct FlightGraph {
    airports: Vec<String>,
    airport_index: FxHashMap<String, usize>,
    routes: Vec<StoredRoute>,
    route_lookup: FxHashMap<(usize, usize), usize>,
    adjacency: Vec<Vec<(usize, usize)>>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport with no routes yet. Returns its index.
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&index) = self.airport_index.get(id) {
            return index;
        }
        let index = self.airports.len();
        self.airports.push(id.to_string());
        self.airport_index.insert(id.to_string(), index);
        self.adjacency.push(Vec::new());
        index
    }

    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        distance: f64,
        fuel: f64,
        time: f64,
        weather: f64,
    ) -> Result<(), RouteError> {
        if a == b {
            return Err(RouteError::SelfLoop(a.to_string()));
        }
        let attributes = EdgeAttributes::new(distance, fuel, time, weather);
        attributes.validate()?;

        if self.find_route(a, b).is_some() {
            return Err(RouteError::DuplicateEdge {
                from: a.to_string(),
                to: b.to_string(),
            });
        }

        let from = self.add_node(a);
        let to = self.add_node(b);
        let route_index = self.routes.len();
        self.routes.push(StoredRoute {
            from,
            to,
            attributes,
        });
        self.route_lookup.insert(pair_key(from, to), route_index);
        self.adjacency[from].push((to, route_index));
        self.adjacency[to].push((from, route_index));
        Ok(())
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.airport_index.contains_key(id)
    }

    pub fn get_edge_attribute(&self, a: &str, b: &str, key: EdgeAttribute) -> Result<f64, RouteError> {
        let route_index = self.require_route(a, b)?;
        Ok(self.routes[route_index].attributes.get(key))
    }

    pub fn set_edge_attribute(
        &mut self,
        a: &str,
        b: &str,
        key: EdgeAttribute,
        value: f64,
    ) -> Result<(), RouteError> {
        let route_index = self.require_route(a, b)?;
        validate_value(key, value)?;
        *self.routes[route_index].attributes.slot_mut(key) = value;
        Ok(())
    }

    pub fn edge_attributes(&self, a: &str, b: &str) -> Result<EdgeAttributes, RouteError> {
        let route_index = self.require_route(a, b)?;
        Ok(self.routes[route_index].attributes)
    }

    pub fn all_edges(&self) -> impl Iterator<Item = Route<'_>> + '_ {
        self.routes.iter().map(|route| Route {
            from: &self.airports[route.from],
            to: &self.airports[route.to],
            attributes: route.attributes,
        })
    }

    /// Airport codes in insertion order.
    pub fn airports(&self) -> &[String] {
        &self.airports
    }

    pub fn neighbors(&self, id: &str) -> Result<Vec<&str>, RouteError> {
        let index = self
            .node_index(id)
            .ok_or_else(|| RouteError::InvalidNode(id.to_string()))?;
        Ok(self.adjacency[index]
            .iter()
            .map(|&(neighbor, _)| self.airports[neighbor].as_str())
            .collect())
    }

    pub fn node_count(&self) -> usize {
        self.airports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.routes.len()
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<usize> {
        self.airport_index.get(id).copied()
    }

    pub(crate) fn airport_name(&self, index: usize) -> &str {
        &self.airports[index]
    }

    /// Neighbors of an airport by index, paired with the route's attributes.
    pub(crate) fn connections(&self, index: usize) -> impl Iterator<Item = (usize, &EdgeAttributes)> + '_ {
        self.adjacency[index]
            .iter()
            .map(|&(neighbor, route_index)| (neighbor, &self.routes[route_index].attributes))
    }

    fn find_route(&self, a: &str, b: &str) -> Option<usize> {
        let from = self.node_index(a)?;
        let to = self.node_index(b)?;
        self.route_lookup.get(&pair_key(from, to)).copied()
    }

    fn require_route(&self, a: &str, b: &str) -> Result<usize, RouteError> {
        self.find_route(a, b).ok_or_else(|| RouteError::NoSuchEdge {
            from: a.to_string(),
            to: b.to_string(),
        })
    }
}

fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
