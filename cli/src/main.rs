use clap::Parser;
use flightroute::colors::ColorScheme;
use flightroute::display::{display_airports, display_route_error};
use flightroute::logging::init_tracing;
use flightroute::session::{handle_request, run_session};
use flightroute::*;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    let mut app = match RoutePlannerApp::new(&args) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
    };

    if args.list_airports {
        display_airports(app.airports(), &colors);
        return;
    }

    if args.interactive {
        let stdin = std::io::stdin();
        if let Err(error) = run_session(stdin.lock(), &mut app, &args, &colors) {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
        return;
    }

    let search_request = match create_search_request(&args) {
        Ok(request) => request,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error_message);
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_request(&mut app, search_request, &args, &colors) {
        display_route_error(&error, app.airports(), &colors);
        std::process::exit(1);
    }
}
