use crate::error::RouteError;
use crate::graph::EdgeAttribute;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Optimization factor a route query minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Distance,
    Fuel,
    Time,
    Weather,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Distance, Metric::Fuel, Metric::Time, Metric::Weather];

    pub fn attribute(&self) -> EdgeAttribute {
        match self {
            Metric::Distance => EdgeAttribute::Distance,
            Metric::Fuel => EdgeAttribute::Fuel,
            Metric::Time => EdgeAttribute::Time,
            Metric::Weather => EdgeAttribute::Weather,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Distance => "km",
            Metric::Fuel => "liters",
            Metric::Time => "hours",
            Metric::Weather => "weather score",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Fuel => "fuel",
            Metric::Time => "time",
            Metric::Weather => "weather",
        }
    }

    /// Capitalized name used in result lines, e.g. "Total Fuel".
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Distance => "Distance",
            Metric::Fuel => "Fuel",
            Metric::Time => "Time",
            Metric::Weather => "Weather",
        }
    }
}

impl FromStr for Metric {
    type Err = RouteError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "fuel" => Ok(Metric::Fuel),
            "time" => Ok(Metric::Time),
            "weather" => Ok(Metric::Weather),
            _ => Err(RouteError::UnknownMetric(token.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
