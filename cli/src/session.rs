use flightroute_core::RouteError;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::app::RoutePlannerApp;
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display::{display_route_error, display_search_info, display_search_results};
use crate::json_output::{create_json_output, print_json_output};
use crate::search::{SearchRequest, execute_search, parse_weather_threshold};
use crate::string_normalization::normalize_airport_code;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Query(SearchRequest),
    Clear,
    Quit,
}

/// Parses `FROM TO [METRIC] [THRESHOLD]`, `clear` or `quit`. Blank lines yield `None`.
pub fn parse_session_line(line: &str, default_metric: &str) -> Result<Option<SessionCommand>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [command] if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") => {
            Ok(Some(SessionCommand::Quit))
        }
        [command] if command.eq_ignore_ascii_case("clear") => Ok(Some(SessionCommand::Clear)),
        [from, to, rest @ ..] if rest.len() <= 2 => {
            let metric_token = rest
                .first()
                .map(|token| token.to_lowercase())
                .unwrap_or_else(|| default_metric.to_string());
            let weather_threshold = match rest.get(1) {
                Some(score) => parse_weather_threshold(score)?,
                None => None,
            };

            Ok(Some(SessionCommand::Query(SearchRequest {
                from: normalize_airport_code(from),
                to: normalize_airport_code(to),
                metric_token,
                weather_threshold,
            })))
        }
        _ => Err(format!(
            "Expected FROM TO [METRIC] [THRESHOLD], got '{}'",
            line.trim()
        )),
    }
}

/// Runs one request against the session graph and prints the outcome.
pub fn handle_request(
    app: &mut RoutePlannerApp,
    request: SearchRequest,
    display_options: &Args,
    colors: &ColorScheme,
) -> Result<(), RouteError> {
    let show_info = !display_options.json && !display_options.quiet;
    if show_info {
        display_search_info(&request, colors);
    }

    let result = execute_search(&mut app.planner, request)?;

    if display_options.json {
        print_json_output(&create_json_output(&result, app.seed));
    } else {
        display_search_results(&result, display_options, colors);
    }
    Ok(())
}

/// Reads queries until `quit` or end of input. The graph is shared by every
/// query, so weather surcharges from earlier lines carry into later ones.
pub fn run_session<R: BufRead>(
    input: R,
    app: &mut RoutePlannerApp,
    display_options: &Args,
    colors: &ColorScheme,
) -> io::Result<()> {
    let prompt = !display_options.json;

    if prompt {
        println!("{}", crate::display::format_airport_list(app.airports()));
        println!("Enter: FROM TO [distance|fuel|time|weather] [weather score], or 'quit'");
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_session_line(&line, &display_options.metric) {
            Ok(None) => continue,
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Clear)) => println!("\n---\n"),
            Ok(Some(SessionCommand::Query(request))) => {
                if let Err(error) = handle_request(app, request, display_options, colors) {
                    display_route_error(&error, app.airports(), colors);
                }
            }
            Err(message) => eprintln!("{} {}", colors.error("❌ Error:"), message),
        }
    }

    debug!(penalty_passes = app.planner.penalty_passes(), "session finished");
    Ok(())
}
