use super::*;

use crate::catalog::Catalog;

fn question(key: &str) -> &'static Question {
    Catalog::core4()
        .question_for_answer(key)
        .expect("known answer key")
}

#[test]
fn test_minus_one_is_always_na() {
    assert_eq!(
        resolve(question("prThroughput"), NA_SENTINEL),
        Rating::NotApplicable
    );
    assert_eq!(
        resolve(question("changeFailureRate"), NA_SENTINEL),
        Rating::NotApplicable
    );
    assert_eq!(resolve(question("focus"), NA_SENTINEL), Rating::NotApplicable);
}

#[test]
fn test_nine_is_na_only_on_ordinal_questions() {
    // On every 1-5 question, 9 is the legacy sentinel.
    assert_eq!(
        resolve(question("changeFailureRate"), 9.0),
        Rating::NotApplicable
    );
    assert_eq!(resolve(question("incidents"), 9.0), Rating::NotApplicable);

    // On the continuous throughput question, 9.0 is the real top answer.
    assert_eq!(resolve(question("prThroughput"), 9.0), Rating::Value(9.0));
}

#[test]
fn test_ordinary_values_pass_through() {
    assert_eq!(resolve(question("prThroughput"), 3.5), Rating::Value(3.5));
    assert_eq!(resolve(question("focus"), 4.0), Rating::Value(4.0));
    assert_eq!(Rating::Value(4.0).value(), Some(4.0));
    assert_eq!(Rating::NotApplicable.value(), None);
}

#[test]
fn test_favorable_thresholds() {
    // Speed is favorable from 3.5 up, every other dimension from 4 up.
    assert!(is_favorable(Dimension::Speed, 3.5));
    assert!(!is_favorable(Dimension::Speed, 3.4));
    assert!(is_favorable(Dimension::Quality, 4.0));
    assert!(!is_favorable(Dimension::Quality, 3.9));
    assert!(is_favorable(Dimension::Effectiveness, 5.0));
    assert!(!is_favorable(Dimension::Impact, 3.0));
}

#[test]
fn test_impact_band_midpoints() {
    assert_eq!(impact_band_midpoint(5.0), 90.0);
    assert_eq!(impact_band_midpoint(4.0), 70.0);
    assert_eq!(impact_band_midpoint(3.0), 50.0);
    assert_eq!(impact_band_midpoint(2.0), 30.0);
    assert_eq!(impact_band_midpoint(1.0), 10.0);
}

#[test]
fn test_quality_failure_rate_is_piecewise() {
    assert_eq!(quality_failure_rate_percent(5.0), 0.0);
    assert_eq!(quality_failure_rate_percent(4.0), 7.5);
    assert_eq!(quality_failure_rate_percent(3.0), 12.5);
    assert_eq!(quality_failure_rate_percent(2.0), 18.0);
    assert_eq!(quality_failure_rate_percent(1.0), 25.0);

    // Rounded to the nearest step, not interpolated.
    assert_eq!(quality_failure_rate_percent(4.6), 0.0);
    assert_eq!(quality_failure_rate_percent(4.4), 7.5);
    assert_eq!(quality_failure_rate_percent(0.0), 25.0);
}
