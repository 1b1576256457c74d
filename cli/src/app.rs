use flightroute_core::{PlannerConfig, RoutePlanner};
use rand::Rng;
use std::error::Error;
use tracing::info;

use crate::args::Args;

pub struct RoutePlannerApp {
    pub planner: RoutePlanner,
    pub seed: u64,
}

impl RoutePlannerApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let config = PlannerConfig::new(args.fuel_rate, args.speed, args.surcharge);

        // Weather scores are drawn once per session
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        let planner = RoutePlanner::with_seed(config, seed)?;

        info!(seed, "flight network ready");
        Ok(Self { planner, seed })
    }

    pub fn airports(&self) -> &[String] {
        self.planner.graph().airports()
    }
}
