use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::models::FlightLog;

/// Pre-aggregated per-log totals as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    pub n_logs: usize,
    pub n_flight_segments: usize,
    pub total_flight_time_secs: f64,
    pub segment_durations: Vec<f64>,
}

/// Aggregate statistics over one or more flight logs.
///
/// All flight-time fields are `None` when no contributing log has any validated
/// segments (either nothing was classified, or classification found nothing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogSummary {
    pub n_logs: usize,
    pub n_flight_segments: Option<usize>,
    pub total_flight_time_secs: Option<f64>,
    pub avg_flight_time_secs: Option<f64>,
    pub shortest_flight_secs: Option<f64>,
    pub longest_flight_secs: Option<f64>,
}

impl LogSummary {
    /// Aggregate a batch of in-memory flight logs.
    ///
    /// Logs that were never classified contribute zero to every sum; summarizing an
    /// empty batch is an error since an aggregate must describe at least one log.
    pub fn from_flight_logs(flight_logs: &[FlightLog]) -> Result<Self, MetricsError> {
        if flight_logs.is_empty() {
            return Err(MetricsError::EmptyAggregate);
        }

        let mut n_segments = 0usize;
        let mut flight_time = 0.0f64;
        let mut shortest: Option<f64> = None;
        let mut longest: Option<f64> = None;
        for log in flight_logs {
            if let Some(n) = log.metadata.n_flight_segments {
                n_segments += n;

                if let Some(segments) = &log.metadata.flight_segments {
                    for segment in segments {
                        flight_time += segment.duration_secs;
                        shortest =
                            Some(shortest.map_or(segment.duration_secs, |s| {
                                s.min(segment.duration_secs)
                            }));
                        longest =
                            Some(longest.map_or(segment.duration_secs, |l| {
                                l.max(segment.duration_secs)
                            }));
                    }
                }
            }
        }

        if n_segments == 0 {
            return Ok(Self {
                n_logs: flight_logs.len(),
                n_flight_segments: None,
                total_flight_time_secs: None,
                avg_flight_time_secs: None,
                shortest_flight_secs: None,
                longest_flight_secs: None,
            });
        }

        Ok(Self {
            n_logs: flight_logs.len(),
            n_flight_segments: Some(n_segments),
            total_flight_time_secs: Some(flight_time),
            avg_flight_time_secs: Some(flight_time / n_segments as f64),
            shortest_flight_secs: shortest,
            longest_flight_secs: longest,
        })
    }

    pub fn from_flight_log(flight_log: &FlightLog) -> Result<Self, MetricsError> {
        Self::from_flight_logs(std::slice::from_ref(flight_log))
    }

    /// Build a summary from totals that were already aggregated by the database.
    pub fn from_summary_totals(totals: &SummaryTotals) -> Result<Self, MetricsError> {
        if totals.n_logs == 0 {
            return Err(MetricsError::EmptyAggregate);
        }

        if totals.n_flight_segments == 0 {
            return Ok(Self {
                n_logs: totals.n_logs,
                n_flight_segments: None,
                total_flight_time_secs: None,
                avg_flight_time_secs: None,
                shortest_flight_secs: None,
                longest_flight_secs: None,
            });
        }

        let mut shortest: Option<f64> = None;
        let mut longest: Option<f64> = None;
        for &duration in &totals.segment_durations {
            shortest = Some(shortest.map_or(duration, |s| s.min(duration)));
            longest = Some(longest.map_or(duration, |l| l.max(duration)));
        }

        Ok(Self {
            n_logs: totals.n_logs,
            n_flight_segments: Some(totals.n_flight_segments),
            total_flight_time_secs: Some(totals.total_flight_time_secs),
            avg_flight_time_secs: Some(
                totals.total_flight_time_secs / totals.n_flight_segments as f64,
            ),
            shortest_flight_secs: shortest,
            longest_flight_secs: longest,
        })
    }
}

impl std::fmt::Display for LogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Log Summary:")?;
        writeln!(f, "    Flight Logs: {}", self.n_logs)?;

        match (
            self.total_flight_time_secs,
            self.avg_flight_time_secs,
            self.shortest_flight_secs,
            self.longest_flight_secs,
        ) {
            (Some(total), Some(avg), Some(shortest), Some(longest)) => {
                writeln!(f, "    Total Flight Time: {}", format_duration(total))?;
                writeln!(f, "    Average Flight Time: {}", format_duration(avg))?;
                writeln!(f, "    Shortest Flight: {}", format_duration(shortest))?;
                write!(f, "    Longest Flight: {}", format_duration(longest))
            }
            _ => write!(
                f,
                "    No flights detected or flight metrics not yet calculated."
            ),
        }
    }
}

/// Render a duration in whole hours/minutes/seconds, e.g. `1h 16m 20s`.
pub fn format_duration(total_secs: f64) -> String {
    let total = total_secs.round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
