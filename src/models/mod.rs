pub mod flight_log;
pub mod segment;
pub mod summary;

pub use flight_log::{FlightData, FlightLog, LogMetadata};
pub use segment::{FlightMode, FlightSegment};
pub use summary::{LogSummary, SummaryTotals};
