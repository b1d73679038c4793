pub mod db;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod segmentation;

pub use db::Database;
pub use error::MetricsError;
pub use models::{
    FlightData, FlightLog, FlightMode, FlightSegment, LogMetadata, LogSummary, SummaryTotals,
};
pub use pipeline::{batch_process, process_log};
pub use segmentation::{classify_flight, find_flights, generate_flight_metrics, SegmentationConfig};
