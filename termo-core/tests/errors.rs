use termo_core::{TempSeries, TermoError};

#[test]
fn invalid_sample_display_names_the_offending_value() {
    let err = TempSeries::from_samples(&[-274.0]).unwrap_err();
    assert_eq!(err, TermoError::invalid_sample(-274.0));
    assert!(err.to_string().contains("-274"));
}

#[test]
fn validation_and_query_errors_are_distinguishable() {
    assert!(TermoError::EmptyInput.is_validation());
    assert!(TermoError::invalid_sample(-300.0).is_validation());
    assert!(!TermoError::EmptySeries.is_validation());
}
