pub mod algorithm;
pub mod classify;
pub mod config;
mod extract;
mod merge;

pub use algorithm::{find_flights, generate_flight_metrics};
pub use classify::classify_flight;
pub use config::SegmentationConfig;
