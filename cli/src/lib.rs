pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod session;
pub mod string_normalization;

// Re-export commonly used items
pub use app::RoutePlannerApp;
pub use args::Args;
pub use search::{SearchRequest, SearchResult, create_search_request, execute_search};
pub use string_normalization::normalize_airport_code;
