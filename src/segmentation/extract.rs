use crate::error::MetricsError;
use crate::models::{FlightData, FlightMode};
use crate::segmentation::config::SegmentationConfig;

/// Raw takeoff/landing index pair prior to noise filtering.
pub type Candidate = (usize, usize);

/// Find candidate flight segments from the labeled series.
///
/// Returns `(candidates, next_segment_delta)` where `next_segment_delta[i]` is the
/// elapsed-time gap, in seconds, between candidate `i`'s end and candidate `i + 1`'s
/// start.
///
/// The first `start_trim_secs` of the log are skipped, and a label change exactly at
/// the trim boundary is suppressed as a windowing artifact. With `midair_start` set,
/// a trimmed region that begins airborne instead gets the trim index injected as its
/// takeoff.
pub(crate) fn extract_candidates(
    flight_data: &FlightData,
    config: &SegmentationConfig,
) -> Result<(Vec<Candidate>, Vec<f64>), MetricsError> {
    let elapsed_time = &flight_data.elapsed_time;
    let modes = &flight_data.flight_mode;

    // If the trim covers the whole series there is nothing to extract
    let Some(trim_idx) = elapsed_time
        .iter()
        .position(|&t| t >= config.start_trim_secs)
    else {
        return Ok((Vec::new(), Vec::new()));
    };

    let mut transitions: Vec<usize> = Vec::new();
    if config.midair_start && modes.get(trim_idx) == Some(&FlightMode::Airborne) {
        transitions.push(trim_idx);
    }

    // Transition points are the last index of each run; the diff at the trim
    // boundary itself (trim_idx vs trim_idx + 1) is forced to zero
    for i in (trim_idx + 1)..modes.len().saturating_sub(1) {
        if modes[i] != modes[i + 1] {
            transitions.push(i);
        }
    }

    // Takeoffs and landings must pair up; an odd count means the series violates the
    // input contract (typically a log that cuts off mid-air)
    if transitions.len() % 2 != 0 {
        return Err(MetricsError::OddTransitionCount {
            count: transitions.len(),
        });
    }

    let candidates: Vec<Candidate> = transitions
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let mut next_segment_delta = Vec::new();
    for window in candidates.windows(2) {
        let (_, current_end) = window[0];
        let (next_start, _) = window[1];
        next_segment_delta.push(elapsed_time[next_start] - elapsed_time[current_end]);
    }

    Ok((candidates, next_segment_delta))
}
