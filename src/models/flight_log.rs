use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::models::{FlightMode, FlightSegment};

/// FlySight hardware groups logs in `YY-mm-dd` directories of `HH-MM-SS.CSV` files.
const LOG_DATETIME_FMT: &str = "%y-%m-%d_%H-%M-%S";

/// Columnar telemetry series for a single flight log.
///
/// `elapsed_time` and `groundspeed` come from the parser; `flight_mode` stays empty
/// until the classifier has run and then holds one label per row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    pub elapsed_time: Vec<f64>,
    pub groundspeed: Vec<f64>,
    pub flight_mode: Vec<FlightMode>,
}

impl FlightData {
    pub fn new(elapsed_time: Vec<f64>, groundspeed: Vec<f64>) -> Self {
        Self {
            elapsed_time,
            groundspeed,
            flight_mode: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elapsed_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed_time.is_empty()
    }

    pub fn is_classified(&self) -> bool {
        !self.is_empty() && self.flight_mode.len() == self.elapsed_time.len()
    }

    /// Validate the input contract before any classification or extraction runs.
    pub fn ensure_well_formed(&self) -> Result<(), MetricsError> {
        if self.is_empty() {
            return Err(MetricsError::EmptySeries);
        }
        if self.groundspeed.len() != self.elapsed_time.len() {
            return Err(MetricsError::ColumnLengthMismatch {
                column: "groundspeed",
                expected: self.elapsed_time.len(),
                actual: self.groundspeed.len(),
            });
        }
        for (idx, pair) in self.elapsed_time.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(MetricsError::NonMonotonicTime { idx: idx + 1 });
            }
        }
        Ok(())
    }
}

/// Per-log record of what segmentation found.
///
/// `n_flight_segments` of `None` means classification has not run for this log;
/// `Some(0)` means it ran and found nothing. Zero is never used as a stand-in for
/// "not yet classified".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMetadata {
    pub log_date: String,
    pub log_time: String,
    pub n_flight_segments: Option<usize>,
    pub total_flight_time_secs: f64,
    pub flight_segments: Option<Vec<FlightSegment>>,
}

impl LogMetadata {
    pub fn new(log_date: impl Into<String>, log_time: impl Into<String>) -> Self {
        Self {
            log_date: log_date.into(),
            log_time: log_time.into(),
            n_flight_segments: None,
            total_flight_time_secs: 0.0,
            flight_segments: None,
        }
    }

    /// Fold validated segments into the per-log aggregates.
    ///
    /// `None` records a classified-but-empty result: segment count 0 and zero total
    /// time, which is distinct from a log that was never classified.
    pub fn record_segments(&mut self, segments: Option<Vec<FlightSegment>>) {
        match &segments {
            Some(found) => {
                self.n_flight_segments = Some(found.len());
                self.total_flight_time_secs = found.iter().map(|s| s.duration_secs).sum();
            }
            None => {
                self.n_flight_segments = Some(0);
                self.total_flight_time_secs = 0.0;
            }
        }
        self.flight_segments = segments;
    }
}

impl std::fmt::Display for LogMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let humanized_time = if self.flight_segments.is_some() {
            crate::models::summary::format_duration(self.total_flight_time_secs)
        } else {
            "No flights detected".to_string()
        };

        write!(
            f,
            "Log Date: {} {}\nFlight Segments: {}\nTotal Flight Time: {}",
            self.log_date,
            self.log_time,
            self.n_flight_segments
                .map_or_else(|| "not classified".to_string(), |n| n.to_string()),
            humanized_time
        )
    }
}

/// A parsed flight log paired with its segmentation results.
#[derive(Debug, Clone)]
pub struct FlightLog {
    pub flight_data: FlightData,
    pub metadata: LogMetadata,
}

impl FlightLog {
    pub fn new(flight_data: FlightData, metadata: LogMetadata) -> Self {
        Self {
            flight_data,
            metadata,
        }
    }

    /// The log's wall-clock start, reconstructed from the FlySight file naming.
    pub fn log_datetime(&self) -> Result<NaiveDateTime, MetricsError> {
        let datestr = format!("{}_{}", self.metadata.log_date, self.metadata.log_time);
        NaiveDateTime::parse_from_str(&datestr, LOG_DATETIME_FMT)
            .map_err(|_| MetricsError::InvalidLogDatetime { value: datestr })
    }
}
