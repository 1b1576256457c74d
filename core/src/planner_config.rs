use crate::network::{AVERAGE_SPEED, FUEL_CONSUMPTION_RATE, WEATHER_PENALTY_SURCHARGE};

/// Configuration for building the network and applying weather penalties
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Liters of fuel burned per km, applied once at construction
    pub fuel_consumption_rate: f64,
    /// Cruise speed in km/h used to derive route time
    pub average_speed: f64,
    /// Distance added to each route above the weather threshold
    pub weather_surcharge: f64,
}

impl PlannerConfig {
    pub fn new(fuel_consumption_rate: f64, average_speed: f64, weather_surcharge: f64) -> Self {
        Self {
            fuel_consumption_rate,
            average_speed,
            weather_surcharge,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuel_consumption_rate: FUEL_CONSUMPTION_RATE,
            average_speed: AVERAGE_SPEED,
            weather_surcharge: WEATHER_PENALTY_SURCHARGE,
        }
    }
}
