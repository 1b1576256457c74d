mod common;

use approx::assert_relative_eq;
use common::{corridor_graph, default_graph, split_graph};
use flightroute_core::{
    EdgeAttribute, FlightGraph, Metric, PlannerConfig, QueryResult, RoutePlanner, RouteError,
    query, query_with_config,
};

fn distances(graph: &FlightGraph) -> Vec<f64> {
    graph.all_edges().map(|route| route.attributes.distance).collect()
}

#[test]
fn test_query_found() {
    let mut graph = corridor_graph();

    let result = query(&mut graph, "JFK", "LAX", "distance", None).unwrap();

    assert_eq!(
        result,
        QueryResult::Found {
            path: vec!["JFK".to_string(), "LAX".to_string()],
            total_cost: 3983.0,
            unit: "km",
            metric: Metric::Distance,
        }
    );
    assert!(result.is_found());
}

#[test]
fn test_query_units_follow_metric() {
    let mut graph = corridor_graph();

    for (token, unit) in [
        ("distance", "km"),
        ("fuel", "liters"),
        ("time", "hours"),
        ("weather", "weather score"),
    ] {
        match query(&mut graph, "JFK", "DFW", token, None).unwrap() {
            QueryResult::Found { unit: found_unit, .. } => assert_eq!(found_unit, unit),
            QueryResult::NotFound => panic!("JFK and DFW are connected"),
        }
    }
}

#[test]
fn test_query_not_found() {
    let mut graph = split_graph();
    let result = query(&mut graph, "BOS", "LAX", "time", None).unwrap();
    assert_eq!(result, QueryResult::NotFound);
    assert!(!result.is_found());
}

#[test]
fn test_query_without_threshold_leaves_graph_alone() {
    let mut graph = default_graph();
    let before = distances(&graph);

    query(&mut graph, "JFK", "LAX", "distance", None).unwrap();
    query(&mut graph, "BOS", "MIA", "weather", None).unwrap();

    assert_eq!(distances(&graph), before);
}

#[test]
fn test_query_with_threshold_penalizes_before_search() {
    let mut graph = corridor_graph();

    // JFK-LAX (8.0) gets +10 before the search runs
    let result = query(&mut graph, "JFK", "LAX", "distance", Some(7.0)).unwrap();

    match result {
        QueryResult::Found { path, total_cost, .. } => {
            assert_eq!(path, vec!["JFK", "LAX"]);
            assert_relative_eq!(total_cost, 3993.0);
        }
        QueryResult::NotFound => panic!("expected a route"),
    }
}

#[test]
fn test_query_penalty_persists_and_compounds() {
    let mut graph = corridor_graph();

    query(&mut graph, "JFK", "ORD", "fuel", Some(5.0)).unwrap();
    query(&mut graph, "JFK", "ORD", "fuel", Some(5.0)).unwrap();
    query(&mut graph, "JFK", "ORD", "fuel", None).unwrap();

    assert_relative_eq!(
        graph.get_edge_attribute("JFK", "LAX", EdgeAttribute::Distance).unwrap(),
        4003.0
    );
    assert_relative_eq!(
        graph.get_edge_attribute("ORD", "DFW", EdgeAttribute::Distance).unwrap(),
        1311.0
    );
}

#[test]
fn test_query_custom_surcharge() {
    let mut graph = corridor_graph();
    let config = PlannerConfig::new(0.05, 850.0, 250.0);

    query_with_config(&mut graph, "JFK", "LAX", "distance", Some(7.0), &config).unwrap();

    assert_relative_eq!(
        graph.get_edge_attribute("JFK", "LAX", EdgeAttribute::Distance).unwrap(),
        4233.0
    );
}

#[test]
fn test_query_invalid_airport_does_not_mutate() {
    let mut graph = corridor_graph();
    let before = distances(&graph);

    let result = query(&mut graph, "JFK", "XYZ", "distance", Some(1.0));

    assert_eq!(result, Err(RouteError::InvalidNode("XYZ".to_string())));
    assert_eq!(distances(&graph), before);
}

#[test]
fn test_query_lowercase_airport_is_invalid() {
    let mut graph = corridor_graph();
    let result = query(&mut graph, "jfk", "LAX", "distance", None);
    assert_eq!(result, Err(RouteError::InvalidNode("jfk".to_string())));
}

#[test]
fn test_query_unknown_metric_does_not_mutate() {
    let mut graph = corridor_graph();
    let before = distances(&graph);

    let result = query(&mut graph, "JFK", "LAX", "altitude", Some(1.0));

    assert_eq!(result, Err(RouteError::UnknownMetric("altitude".to_string())));
    assert_eq!(distances(&graph), before);
}

#[test]
fn test_query_result_json_shape() {
    let mut graph = corridor_graph();

    let found = query(&mut graph, "JFK", "LAX", "distance", None).unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["status"], "found");
    assert_eq!(json["path"], serde_json::json!(["JFK", "LAX"]));
    assert_eq!(json["total_cost"], 3983.0);
    assert_eq!(json["unit"], "km");
    assert_eq!(json["metric"], "distance");

    let not_found = serde_json::to_value(QueryResult::NotFound).unwrap();
    assert_eq!(not_found, serde_json::json!({ "status": "not_found" }));
}

#[test]
fn test_planner_session_tracks_penalty_passes() {
    let mut planner = RoutePlanner::with_seed(PlannerConfig::default(), 7).unwrap();
    let before = distances(planner.graph());

    planner.query("JFK", "LAX", "distance", None).unwrap();
    assert_eq!(planner.penalty_passes(), 0);

    // Every weather score is at least 1, so a zero threshold hits every route
    planner.query("JFK", "LAX", "distance", Some(0.0)).unwrap();
    planner.query("SEA", "MIA", "time", Some(0.0)).unwrap();
    assert_eq!(planner.penalty_passes(), 2);

    for (original, now) in before.iter().zip(distances(planner.graph())) {
        assert_relative_eq!(now, original + 20.0);
    }
}

#[test]
fn test_planner_rejected_query_is_not_counted() {
    let mut planner = RoutePlanner::with_seed(PlannerConfig::default(), 7).unwrap();

    let result = planner.query("JFK", "LAX", "altitude", Some(0.0));

    assert!(matches!(result, Err(RouteError::UnknownMetric(_))));
    assert_eq!(planner.penalty_passes(), 0);
}

#[test]
fn test_planner_seed_is_reproducible() {
    let first = RoutePlanner::with_seed(PlannerConfig::default(), 99).unwrap();
    let second = RoutePlanner::with_seed(PlannerConfig::default(), 99).unwrap();

    let weather = |planner: &RoutePlanner| -> Vec<f64> {
        planner.graph().all_edges().map(|r| r.attributes.weather).collect()
    };
    assert_eq!(weather(&first), weather(&second));
    assert_relative_eq!(first.config().weather_surcharge, 10.0);
}

#[test]
fn test_planner_failed_penalty_keeps_session_state() {
    let config = PlannerConfig::new(0.05, 850.0, f64::MAX);
    let mut planner = RoutePlanner::with_seed(config, 7).unwrap();

    // The first pass rounds every distance to f64::MAX; the second overflows
    planner.query("JFK", "LAX", "distance", Some(0.0)).unwrap();
    let after_first = distances(planner.graph());

    let result = planner.query("JFK", "LAX", "distance", Some(0.0));

    assert!(matches!(result, Err(RouteError::InvalidAttributeValue { .. })));
    assert_eq!(planner.penalty_passes(), 1);
    assert_eq!(distances(planner.graph()), after_first);
}

#[test]
fn test_planner_invalid_airport_after_penalty_is_not_counted() {
    let mut planner = RoutePlanner::with_seed(PlannerConfig::default(), 7).unwrap();
    planner.query("JFK", "LAX", "distance", Some(5.0)).unwrap();
    let before = distances(planner.graph());

    let result = planner.query("JFK", "XXX", "distance", Some(5.0));

    assert!(matches!(result, Err(RouteError::InvalidNode(_))));
    assert_eq!(planner.penalty_passes(), 1);
    assert_eq!(distances(planner.graph()), before);
}
