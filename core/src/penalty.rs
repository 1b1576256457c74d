use crate::error::RouteError;
use crate::graph::{EdgeAttribute, FlightGraph, validate_value};
use tracing::info;

/// Adds `surcharge` to the distance of every route whose weather score is
/// strictly above `threshold`. Returns how many routes were surcharged.
///
/// The surcharge is not tracked: calling this again with the same arguments
/// adds it a second time. Fuel and time are left untouched. Every new
/// distance is checked before any route is written, so on error the graph is
/// unchanged.
pub fn apply_weather_penalty(
    graph: &mut FlightGraph,
    threshold: f64,
    surcharge: f64,
) -> Result<usize, RouteError> {
    if !(surcharge.is_finite() && surcharge >= 0.0) {
        return Err(RouteError::InvalidAttributeValue {
            attribute: EdgeAttribute::Distance,
            value: surcharge,
        });
    }

    let stormy_routes = graph
        .all_edges()
        .filter(|route| route.attributes.weather > threshold)
        .map(|route| {
            let surcharged = route.attributes.distance + surcharge;
            validate_value(EdgeAttribute::Distance, surcharged)?;
            Ok((route.from.to_string(), route.to.to_string(), surcharged))
        })
        .collect::<Result<Vec<(String, String, f64)>, RouteError>>()?;

    for (from, to, distance) in &stormy_routes {
        graph.set_edge_attribute(from, to, EdgeAttribute::Distance, *distance)?;
    }

    info!(
        threshold,
        surcharge,
        penalized = stormy_routes.len(),
        "applied weather penalty"
    );
    Ok(stormy_routes.len())
}
