use flightroute_core::{Metric, QueryResult, RouteError};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{Leg, SearchRequest, SearchResult};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "✈️  Finding route from {} to {}",
        colors.airport(&request.from),
        colors.airport(&request.to)
    );
    println!("⚙️  Optimizing for {}", request.metric_token);

    if let Some(threshold) = request.weather_threshold {
        println!(
            "🌩️  Surcharging routes with weather score above {}",
            colors.weather_score(threshold)
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        println!("\n---\n");
    }

    match &result.outcome {
        QueryResult::Found {
            path,
            total_cost,
            unit,
            metric,
        } => {
            println!("{}", format_path_line(path, colors));
            println!("{}", format_total_line(*metric, *total_cost, unit, colors));

            if display_options.show_legs && !display_options.quiet {
                println!();
                for (leg_index, leg) in result.legs.iter().enumerate() {
                    println!("{}", format_leg(leg_index, leg, *metric, colors));
                }
            }
        }
        QueryResult::NotFound => {
            println!(
                "{}",
                colors.error("❌ No route found between the specified airports.")
            );
        }
    }

    if display_options.verbose {
        display_search_statistics(result, colors);
    }
}

pub fn format_path_line(path: &[String], colors: &ColorScheme) -> String {
    let path_flow = path
        .iter()
        .map(|airport| colors.airport(airport).to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("{} {}", colors.success("Optimal Path:"), path_flow)
}

pub fn format_total_line(metric: Metric, total_cost: f64, unit: &str, colors: &ColorScheme) -> String {
    format!(
        "Total {}: {} {}",
        metric.label(),
        colors.number(&format_cost(total_cost)),
        colors.unit(unit)
    )
}

pub fn format_leg(leg_index: usize, leg: &Leg, metric: Metric, colors: &ColorScheme) -> String {
    let step_number = format!("{}.", leg_index + 1);
    let cost = match metric {
        Metric::Weather => colors.weather_score(leg.cost),
        _ => colors.number(&format_cost(leg.cost)),
    };
    format!(
        "{:3} {} -> {} {} {}",
        colors.step_number(&step_number),
        colors.airport(&leg.from),
        colors.airport(&leg.to),
        cost,
        colors.unit(metric.unit())
    )
}

pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

fn display_search_statistics(result: &SearchResult, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Searched in {} sec",
        colors.stats("📊"),
        colors.number(&format!("{:.6}", result.search_duration))
    );
    if result.penalty_passes > 1 {
        println!(
            "{} Weather penalty applied {} times this session; surcharges have stacked",
            colors.warning("⚠️"),
            colors.number(&result.penalty_passes.to_string())
        );
    }
}

pub fn format_airport_list(airports: &[String]) -> String {
    format!("Available Airports: {}", airports.join(", "))
}

pub fn display_airports(airports: &[String], colors: &ColorScheme) {
    println!("{}", colors.step_number(&format_airport_list(airports)));
}

pub fn display_route_error(error: &RouteError, airports: &[String], colors: &ColorScheme) {
    eprintln!("{} {}", colors.error("❌ Error:"), error);
    if matches!(error, RouteError::InvalidNode(_)) {
        eprintln!("{}", format_airport_list(airports));
    }
}
