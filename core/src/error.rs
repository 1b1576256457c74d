use thiserror::Error;

use crate::graph::EdgeAttribute;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("Invalid airport code: {0}")]
    InvalidNode(String),
    #[error("Unknown optimization factor: {0}")]
    UnknownMetric(String),
    #[error("No route connects {from} and {to}")]
    NoSuchEdge { from: String, to: String },
    #[error("Route {from} - {to} is already defined")]
    DuplicateEdge { from: String, to: String },
    #[error("Route endpoints must differ, got {0} twice")]
    SelfLoop(String),
    #[error("Invalid {attribute} value: {value}")]
    InvalidAttributeValue { attribute: EdgeAttribute, value: f64 },
}
