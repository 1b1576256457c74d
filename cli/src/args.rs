use clap::Parser;
use flightroute_core::{AVERAGE_SPEED, FUEL_CONSUMPTION_RATE, WEATHER_PENALTY_SURCHARGE};

use crate::search::parse_weather_score;

#[derive(Parser, Clone, Debug)]
#[command(name = "flightroute")]
#[command(about = "Find the cheapest flight route between two airports")]
pub struct Args {
    /// Starting airport code (e.g. JFK)
    #[arg(required_unless_present_any = ["list_airports", "interactive"])]
    pub from: Option<String>,

    /// Destination airport code (e.g. LAX)
    #[arg(required_unless_present_any = ["list_airports", "interactive"])]
    pub to: Option<String>,

    /// Optimization factor: distance, fuel, time or weather
    #[arg(short, long, value_name = "FACTOR", default_value = "distance")]
    pub metric: String,

    /// Surcharge routes whose weather score is above this value (1-10)
    #[arg(short = 'w', long, value_name = "SCORE", value_parser = parse_weather_score)]
    pub avoid_weather: Option<f64>,

    /// Distance in km added to each route above the weather threshold
    #[arg(long, value_name = "KM", default_value_t = WEATHER_PENALTY_SURCHARGE)]
    pub surcharge: f64,

    /// Liters of fuel burned per km
    #[arg(long, value_name = "RATE", default_value_t = FUEL_CONSUMPTION_RATE)]
    pub fuel_rate: f64,

    /// Average cruise speed in km/h
    #[arg(long, value_name = "KMH", default_value_t = AVERAGE_SPEED)]
    pub speed: f64,

    /// Seed for the weather scores (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Show every leg of the route with its cost
    #[arg(short = 'l', long)]
    pub show_legs: bool,

    /// Print the available airports and exit
    #[arg(long)]
    pub list_airports: bool,

    /// Read queries from stdin, one per line: FROM TO [METRIC] [THRESHOLD]
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the route
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,
}
