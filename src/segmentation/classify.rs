use crate::models::{FlightData, FlightMode};
use crate::segmentation::config::SegmentationConfig;

/// Label every sample as ground or airborne from smoothed groundspeed.
///
/// Groundspeed measurements are noisy, so each sample is classified against the mean
/// of the trailing `window_width` samples. The window shrinks at the start of the
/// series rather than leaving the first rows unlabeled. A mean exactly at the
/// threshold classifies as airborne.
pub fn classify_flight(flight_data: &mut FlightData, config: &SegmentationConfig) {
    let window = config.window_width.max(1);
    let n = flight_data.groundspeed.len();

    let mut modes = Vec::with_capacity(n);
    let mut window_sum = 0.0f64;
    for i in 0..n {
        window_sum += flight_data.groundspeed[i];
        if i >= window {
            window_sum -= flight_data.groundspeed[i - window];
        }

        let samples_in_window = (i + 1).min(window);
        let mean = window_sum / samples_in_window as f64;
        if mean >= config.airborne_threshold {
            modes.push(FlightMode::Airborne);
        } else {
            modes.push(FlightMode::Ground);
        }
    }

    flight_data.flight_mode = modes;
}
