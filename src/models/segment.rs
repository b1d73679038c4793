use serde::{Deserialize, Serialize};

/// Ground/airborne classification for a single telemetry sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlightMode {
    Ground,
    Airborne,
}

impl FlightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightMode::Ground => "ground",
            FlightMode::Airborne => "airborne",
        }
    }
}

/// A validated takeoff-to-landing interval, indexed into the sample series.
///
/// Only the segment merger constructs these; they are never mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub start_idx: usize,
    pub end_idx: usize,
    pub duration_secs: f64,
}

impl FlightSegment {
    pub fn new(start_idx: usize, end_idx: usize, duration_secs: f64) -> Self {
        Self {
            start_idx,
            end_idx,
            duration_secs,
        }
    }
}
