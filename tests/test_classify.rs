use ppglog::{classify_flight, FlightData, FlightMode, SegmentationConfig};

fn data_from_speeds(groundspeed: Vec<f64>) -> FlightData {
    let elapsed_time = (0..groundspeed.len()).map(|i| i as f64).collect();
    FlightData::new(elapsed_time, groundspeed)
}

fn test_config() -> SegmentationConfig {
    SegmentationConfig {
        window_width: 5,
        airborne_threshold: 2.235,
        ..SegmentationConfig::default()
    }
}

#[test]
fn every_row_gets_a_label() {
    let mut data = data_from_speeds(vec![0.0, 1.0, 3.0, 5.0, 2.0, 0.5, 8.0]);
    classify_flight(&mut data, &test_config());

    assert_eq!(data.flight_mode.len(), data.len());
    assert!(data.is_classified());
}

#[test]
fn threshold_is_inclusive_on_the_airborne_side() {
    // Constant series: rolling mean equals the sample value everywhere
    let mut at_threshold = data_from_speeds(vec![2.235; 10]);
    classify_flight(&mut at_threshold, &test_config());
    assert!(at_threshold
        .flight_mode
        .iter()
        .all(|&m| m == FlightMode::Airborne));

    let mut below_threshold = data_from_speeds(vec![2.235 - 1e-9; 10]);
    classify_flight(&mut below_threshold, &test_config());
    assert!(below_threshold
        .flight_mode
        .iter()
        .all(|&m| m == FlightMode::Ground));
}

#[test]
fn early_samples_use_a_shrinking_window() {
    // A single large sample at the start dominates the small early windows, then
    // dilutes as the window grows to its full width
    let mut data = data_from_speeds(vec![10.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    classify_flight(&mut data, &test_config());

    // Means: 10.0, 5.0, 3.33, 2.5, 2.0, 0.0
    assert_eq!(
        data.flight_mode,
        vec![
            FlightMode::Airborne,
            FlightMode::Airborne,
            FlightMode::Airborne,
            FlightMode::Airborne,
            FlightMode::Ground,
            FlightMode::Ground,
        ]
    );
}

#[test]
fn increasing_groundspeed_never_flips_airborne_to_ground() {
    let speeds = vec![0.0, 1.0, 2.5, 3.0, 4.0, 1.0, 0.5, 6.0, 7.0, 0.0];
    let mut baseline = data_from_speeds(speeds.clone());
    classify_flight(&mut baseline, &test_config());

    for bump_idx in 0..speeds.len() {
        let mut bumped_speeds = speeds.clone();
        bumped_speeds[bump_idx] += 5.0;
        let mut bumped = data_from_speeds(bumped_speeds);
        classify_flight(&mut bumped, &test_config());

        for (i, (&before, &after)) in baseline
            .flight_mode
            .iter()
            .zip(bumped.flight_mode.iter())
            .enumerate()
        {
            if before == FlightMode::Airborne {
                assert_eq!(
                    after,
                    FlightMode::Airborne,
                    "bumping sample {bump_idx} flipped sample {i} to ground"
                );
            }
        }
    }
}
