use ppglog::{
    find_flights, generate_flight_metrics, FlightData, FlightLog, FlightMode, LogMetadata,
    MetricsError, SegmentationConfig,
};

/// Build a pre-labeled series from `(mode, run_length)` runs with a fixed sample step.
fn labeled_data(step_secs: f64, runs: &[(FlightMode, usize)]) -> FlightData {
    let n: usize = runs.iter().map(|(_, len)| len).sum();
    let elapsed_time: Vec<f64> = (0..n).map(|i| i as f64 * step_secs).collect();
    let groundspeed = vec![0.0; n];

    let mut data = FlightData::new(elapsed_time, groundspeed);
    for &(mode, len) in runs {
        data.flight_mode.extend(std::iter::repeat(mode).take(len));
    }
    data
}

fn no_trim_config(time_threshold_secs: f64) -> SegmentationConfig {
    SegmentationConfig {
        start_trim_secs: 0.0,
        time_threshold_secs,
        ..SegmentationConfig::default()
    }
}

use FlightMode::{Airborne, Ground};

#[test]
fn single_long_candidate_is_validated() {
    // Candidate (100, 5000) at 0.2 s/sample
    let data = labeled_data(0.2, &[(Ground, 101), (Airborne, 4900), (Ground, 1000)]);

    let segments = find_flights(&data, &no_trim_config(10.0))
        .unwrap()
        .expect("expected one validated segment");

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_idx, 100);
    assert_eq!(segments[0].end_idx, 5000);
    assert!((segments[0].duration_secs - 980.0).abs() < 1e-9);
}

#[test]
fn short_candidate_near_a_real_flight_is_folded_in() {
    // 3 s of noise, a 2 s gap, then a 600 s flight: the noise belongs to the flight
    let data = labeled_data(
        0.2,
        &[
            (Ground, 50),
            (Airborne, 15),
            (Ground, 10),
            (Airborne, 3000),
            (Ground, 100),
        ],
    );

    let segments = find_flights(&data, &no_trim_config(10.0))
        .unwrap()
        .expect("expected one merged segment");

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_idx, 49);
    assert_eq!(segments[0].end_idx, 3074);
}

#[test]
fn isolated_transient_spikes_are_discarded() {
    // Two 2 s spikes separated by 50 s of quiet ground: neither is a flight
    let data = labeled_data(
        0.2,
        &[
            (Ground, 50),
            (Airborne, 10),
            (Ground, 250),
            (Airborne, 10),
            (Ground, 50),
        ],
    );

    let segments = find_flights(&data, &no_trim_config(10.0)).unwrap();
    assert!(segments.is_none());
}

#[test]
fn label_constant_series_yields_no_candidates() {
    let all_ground = labeled_data(1.0, &[(Ground, 500)]);
    assert!(find_flights(&all_ground, &no_trim_config(15.0))
        .unwrap()
        .is_none());

    let all_airborne = labeled_data(1.0, &[(Airborne, 500)]);
    assert!(find_flights(&all_airborne, &no_trim_config(15.0))
        .unwrap()
        .is_none());
}

#[test]
fn odd_transition_count_is_an_error() {
    // The log cuts off mid-air: a takeoff with no landing
    let data = labeled_data(1.0, &[(Ground, 100), (Airborne, 400)]);

    let result = find_flights(&data, &no_trim_config(15.0));
    assert_eq!(result, Err(MetricsError::OddTransitionCount { count: 1 }));
}

#[test]
fn unclassified_series_is_an_error() {
    let data = FlightData::new(vec![0.0, 1.0, 2.0], vec![0.0, 5.0, 0.0]);
    let result = find_flights(&data, &no_trim_config(15.0));
    assert_eq!(result, Err(MetricsError::Unclassified));
}

#[test]
fn label_change_at_the_trim_boundary_is_suppressed() {
    // Airborne through the trim point, ground after: the discontinuity at the
    // boundary is a windowing artifact, not a landing
    let data = labeled_data(1.0, &[(Airborne, 46), (Ground, 200)]);
    let config = SegmentationConfig {
        start_trim_secs: 45.0,
        time_threshold_secs: 15.0,
        ..SegmentationConfig::default()
    };

    assert!(find_flights(&data, &config).unwrap().is_none());
}

#[test]
fn midair_start_injects_a_takeoff_at_the_trim_boundary() {
    let data = labeled_data(1.0, &[(Ground, 40), (Airborne, 661), (Ground, 100)]);

    // Without the flag the takeoff is swallowed by the trim and the lone landing
    // transition trips the pairing check
    let config = SegmentationConfig {
        start_trim_secs: 45.0,
        time_threshold_secs: 15.0,
        ..SegmentationConfig::default()
    };
    assert_eq!(
        find_flights(&data, &config),
        Err(MetricsError::OddTransitionCount { count: 1 })
    );

    let midair_config = SegmentationConfig {
        midair_start: true,
        ..config
    };
    let segments = find_flights(&data, &midair_config)
        .unwrap()
        .expect("expected one segment starting at the trim boundary");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_idx, 45);
    assert_eq!(segments[0].end_idx, 700);
}

#[test]
fn validated_segments_are_ordered_and_non_overlapping() {
    // Two real flights with an isolated spike between them
    let data = labeled_data(
        1.0,
        &[
            (Ground, 300),
            (Airborne, 120),
            (Ground, 20),
            (Airborne, 5),
            (Ground, 200),
            (Airborne, 300),
            (Ground, 100),
        ],
    );
    let config = SegmentationConfig {
        start_trim_secs: 45.0,
        time_threshold_secs: 15.0,
        ..SegmentationConfig::default()
    };

    let segments = find_flights(&data, &config)
        .unwrap()
        .expect("expected two validated segments");

    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start_idx, segments[0].end_idx), (299, 419));
    assert_eq!((segments[1].start_idx, segments[1].end_idx), (644, 944));
    for pair in segments.windows(2) {
        assert!(pair[0].end_idx < pair[1].start_idx);
    }
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    // Real groundspeeds this time so classification actually derives the labels
    let mut speeds = vec![0.0; 120];
    speeds.extend(vec![10.0; 600]);
    speeds.extend(vec![0.0; 120]);
    let elapsed: Vec<f64> = (0..speeds.len()).map(|i| i as f64).collect();

    let mut flight_log = FlightLog::new(
        FlightData::new(elapsed, speeds),
        LogMetadata::new("22-04-20", "13-46-02"),
    );
    let config = SegmentationConfig::default();

    generate_flight_metrics(&mut flight_log, &config, true).unwrap();
    let first_pass = flight_log.metadata.flight_segments.clone();
    assert!(first_pass.is_some());

    generate_flight_metrics(&mut flight_log, &config, true).unwrap();
    assert_eq!(flight_log.metadata.flight_segments, first_pass);
}

#[test]
fn zero_segment_log_aggregates_to_zero_not_null() {
    let mut flight_log = FlightLog::new(
        FlightData::new(vec![0.0, 50.0, 100.0], vec![0.0, 0.0, 0.0]),
        LogMetadata::new("22-04-20", "13-46-02"),
    );

    generate_flight_metrics(&mut flight_log, &SegmentationConfig::default(), true).unwrap();

    assert_eq!(flight_log.metadata.n_flight_segments, Some(0));
    assert_eq!(flight_log.metadata.total_flight_time_secs, 0.0);
}

#[test]
fn skipping_segment_classification_leaves_metadata_unclassified() {
    let mut flight_log = FlightLog::new(
        FlightData::new(vec![0.0, 50.0, 100.0], vec![0.0, 0.0, 0.0]),
        LogMetadata::new("22-04-20", "13-46-02"),
    );

    generate_flight_metrics(&mut flight_log, &SegmentationConfig::default(), false).unwrap();

    assert!(flight_log.flight_data.is_classified());
    assert_eq!(flight_log.metadata.n_flight_segments, None);
    assert!(flight_log.metadata.flight_segments.is_none());
}

#[test]
fn non_monotonic_time_is_rejected() {
    let mut flight_log = FlightLog::new(
        FlightData::new(vec![0.0, 2.0, 1.0], vec![0.0, 0.0, 0.0]),
        LogMetadata::new("22-04-20", "13-46-02"),
    );

    let result = generate_flight_metrics(&mut flight_log, &SegmentationConfig::default(), true);
    assert_eq!(result, Err(MetricsError::NonMonotonicTime { idx: 2 }));
}
