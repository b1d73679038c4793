use log::debug;

use crate::error::MetricsError;
use crate::models::{FlightData, FlightLog, FlightSegment};
use crate::segmentation::{classify, config::SegmentationConfig, extract, merge};

/// Identify validated flight segments in an already-classified series.
///
/// Returns `Ok(None)` when the log contains no usable candidates or every candidate
/// was discarded as noise.
pub fn find_flights(
    flight_data: &FlightData,
    config: &SegmentationConfig,
) -> Result<Option<Vec<FlightSegment>>, MetricsError> {
    if !flight_data.is_classified() {
        return Err(MetricsError::Unclassified);
    }

    let (candidates, next_segment_delta) = extract::extract_candidates(flight_data, config)?;
    if candidates.is_empty() {
        return Ok(None);
    }
    debug!("extracted {} candidate segments", candidates.len());

    Ok(merge::merge_candidates(
        &flight_data.elapsed_time,
        &candidates,
        &next_segment_delta,
        config.time_threshold_secs,
    ))
}

/// Full segmentation pass for a flight log: validate, classify, segment, aggregate.
///
/// With `classify_segments` disabled only the per-sample classification runs, leaving
/// the log's metadata marked as not yet classified. On error the series is left
/// unmodified apart from the classification pass, which is idempotent.
pub fn generate_flight_metrics(
    flight_log: &mut FlightLog,
    config: &SegmentationConfig,
    classify_segments: bool,
) -> Result<(), MetricsError> {
    flight_log.flight_data.ensure_well_formed()?;
    classify::classify_flight(&mut flight_log.flight_data, config);

    if classify_segments {
        let segments = find_flights(&flight_log.flight_data, config)?;
        debug!(
            "log {} {}: {} validated segments",
            flight_log.metadata.log_date,
            flight_log.metadata.log_time,
            segments.as_ref().map_or(0, |s| s.len())
        );
        flight_log.metadata.record_segments(segments);
    }

    Ok(())
}
