use termo_core::{TempSeries, TermoError};

#[test]
fn scenario_mixed_sign_series() {
    let series = TempSeries::from_samples(&[-5.0, 0.0, 5.0, 10.0]).unwrap();

    assert_eq!(series.average().unwrap(), 2.5);
    assert_eq!(series.deviation().unwrap(), 125.0);
    assert_eq!(series.min().unwrap(), -5.0);
    assert_eq!(series.max().unwrap(), 10.0);
    assert_eq!(series.closest_to_zero().unwrap(), 0.0);
    assert_eq!(series.temps_less_than(3.0), vec![-5.0, 0.0]);
    assert_eq!(series.temps_greater_than(3.0), vec![5.0, 10.0]);
}

#[test]
fn construction_rejects_an_empty_batch() {
    assert_eq!(
        TempSeries::from_samples(&[]).unwrap_err(),
        TermoError::EmptyInput
    );
}

#[test]
fn construction_reports_the_offending_value() {
    let err = TempSeries::from_samples(&[-274.0]).unwrap_err();
    assert_eq!(err, TermoError::invalid_sample(-274.0));
}

#[test]
fn construction_reports_the_last_invalid_value() {
    let err = TempSeries::from_samples(&[-300.0, 5.0, -400.0]).unwrap_err();
    assert_eq!(err, TermoError::invalid_sample(-400.0));
}

#[test]
fn the_floor_itself_is_a_valid_reading() {
    let series = TempSeries::from_samples(&[-273.0]).unwrap();
    assert_eq!(series.as_slice(), &[-273.0]);
}

#[test]
fn append_keeps_valid_readings_across_a_failure() {
    let mut series = TempSeries::new();

    let err = series.append(&[10.0, 20.0, -300.0]).unwrap_err();
    assert_eq!(err, TermoError::invalid_sample(-300.0));
    assert_eq!(series.as_slice(), &[10.0, 20.0]);

    // The series stays usable after the failed batch.
    assert_eq!(series.append(&[1.0]).unwrap(), 31);
    assert_eq!(series.as_slice(), &[10.0, 20.0, 1.0]);
}

#[test]
fn append_returns_the_total_truncated_toward_zero() {
    let mut series = TempSeries::new();
    assert_eq!(series.append(&[1.5, 2.4]).unwrap(), 3);

    let mut cold = TempSeries::new();
    assert_eq!(cold.append(&[-1.5]).unwrap(), -1);
}

#[test]
fn aggregates_fail_on_an_empty_series() {
    let series = TempSeries::new();

    assert_eq!(series.average().unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.deviation().unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.min().unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.max().unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.closest_to_zero().unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.closest_to(7.0).unwrap_err(), TermoError::EmptySeries);
    assert_eq!(series.summary().unwrap_err(), TermoError::EmptySeries);
}

#[test]
fn threshold_filters_do_not_fail_on_an_empty_series() {
    let series = TempSeries::new();
    assert!(series.temps_less_than(0.0).is_empty());
    assert!(series.temps_greater_than(0.0).is_empty());
}

#[test]
fn incremental_appends_double_the_capacity() {
    let mut series = TempSeries::new();
    assert_eq!(series.capacity(), 0);

    let caps: [usize; 6] = [1, 2, 4, 4, 8, 8];
    let mut expected = Vec::new();
    for (i, &cap) in caps.iter().enumerate() {
        let reading = i as f64;
        series.append(&[reading]).unwrap();
        expected.push(reading);

        assert_eq!(series.capacity(), cap);
        assert_eq!(series.as_slice(), expected.as_slice());
    }
}

#[test]
fn batch_construction_sizes_the_buffer_to_the_input() {
    let series = TempSeries::from_samples(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.capacity(), 3);
}

#[test]
fn max_prefers_the_reading_nearest_the_hot_anchor() {
    // 300 is closer to +273 than 500 is, so it wins over the larger value.
    let series = TempSeries::from_samples(&[0.0, 300.0, 500.0]).unwrap();
    assert_eq!(series.max().unwrap(), 300.0);
}

#[test]
fn summary_bundles_the_four_aggregates() {
    let series = TempSeries::from_samples(&[-5.0, 0.0, 5.0, 10.0]).unwrap();
    let summary = series.summary().unwrap();

    assert_eq!(summary.average, 2.5);
    assert_eq!(summary.deviation, 125.0);
    assert_eq!(summary.min, -5.0);
    assert_eq!(summary.max, 10.0);
}

#[test]
fn summary_is_a_point_in_time_snapshot() {
    let mut series = TempSeries::from_samples(&[1.0, 3.0]).unwrap();
    let before = series.summary().unwrap();

    series.append(&[100.0]).unwrap();

    assert_eq!(before.average, 2.0);
    assert_eq!(series.summary().unwrap().max, 100.0);
}
