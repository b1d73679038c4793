use crate::models::FlightSegment;
use crate::segmentation::extract::Candidate;

/// Merge raw candidates into validated flight segments.
///
/// Candidates shorter than `time_threshold_secs` are either discarded as transient
/// spikes (isolated: nothing accumulating and the next candidate is far away) or
/// folded into the accumulating segment as takeoff/landing jitter. Duration alone
/// cannot tell those two apart; proximity to the next candidate is the distinguishing
/// signal.
///
/// A quiet gap of at least `time_threshold_secs` after a candidate, or running out of
/// candidates, closes the accumulation: the accumulated span becomes a segment unless
/// the merged cluster itself is still shorter than the threshold.
///
/// Returns `None` when no candidate survives.
pub(crate) fn merge_candidates(
    elapsed_time: &[f64],
    candidates: &[Candidate],
    next_segment_delta: &[f64],
    time_threshold_secs: f64,
) -> Option<Vec<FlightSegment>> {
    let mut valid_flights = Vec::new();
    let mut flight_indices: Vec<usize> = Vec::new();

    for (i, &(segment_start, segment_end)) in candidates.iter().enumerate() {
        // The final candidate has no gap to a next candidate
        let next_delta = next_segment_delta.get(i).copied();

        let segment_duration = elapsed_time[segment_end] - elapsed_time[segment_start];
        match next_delta {
            Some(delta) if segment_duration < time_threshold_secs => {
                if flight_indices.is_empty() && delta >= time_threshold_secs {
                    // Transient spike while firmly on the ground: below the duration
                    // threshold and distant from the next segment
                    continue;
                }
                // Otherwise treat it as noise adjoining the current flight
                flight_indices.push(segment_start);
                flight_indices.push(segment_end);
            }
            _ => {
                // A genuine segment and/or the last candidate in the file
                flight_indices.push(segment_start);
                flight_indices.push(segment_end);
            }
        }

        // Landing check: a long quiet gap (or end of file) closes the accumulation
        if next_delta.map_or(true, |delta| delta >= time_threshold_secs) {
            let (Some(&takeoff_idx), Some(&landing_idx)) =
                (flight_indices.first(), flight_indices.last())
            else {
                continue;
            };
            flight_indices.clear();

            // Merged spikes may still add up to less than the threshold, or sit at
            // the very end of the file; those clusters never became a flight
            let flight_duration = elapsed_time[landing_idx] - elapsed_time[takeoff_idx];
            if flight_duration < time_threshold_secs {
                continue;
            }

            valid_flights.push(FlightSegment::new(takeoff_idx, landing_idx, flight_duration));
        }
    }

    if valid_flights.is_empty() {
        None
    } else {
        Some(valid_flights)
    }
}
