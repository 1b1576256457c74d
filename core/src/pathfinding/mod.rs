pub mod dijkstra;
pub mod utils;

pub use dijkstra::find_path;
pub use utils::FlightPath;
