use super::*;

fn full_ratings() -> BTreeMap<String, f64> {
    let catalog = Catalog::core4();
    let mut ratings = BTreeMap::new();
    for key in catalog.required_keys() {
        let value = if key == "prThroughput" { 3.5 } else { 4.0 };
        ratings.insert(key.to_string(), value);
    }
    ratings
}

#[test]
fn test_complete_ratings_pass() {
    let catalog = Catalog::core4();
    assert!(validate_ratings(&catalog, &full_ratings()).is_ok());
}

#[test]
fn test_missing_sub_key_rejected() {
    let catalog = Catalog::core4();
    let mut ratings = full_ratings();
    ratings.remove("incidents");

    let err = validate_ratings(&catalog, &ratings).unwrap_err();
    assert_eq!(
        err.issues,
        vec![RatingIssue::MissingAnswer {
            key: "incidents".to_string()
        }]
    );
}

#[test]
fn test_out_of_domain_values_rejected() {
    let catalog = Catalog::core4();

    let mut ratings = full_ratings();
    ratings.insert("changeFailureRate".to_string(), 7.0);
    let err = validate_ratings(&catalog, &ratings).unwrap_err();
    assert_eq!(
        err.issues,
        vec![RatingIssue::OutOfDomain {
            key: "changeFailureRate".to_string(),
            value: 7.0,
        }]
    );

    // Ordinal answers must be whole steps.
    let mut ratings = full_ratings();
    ratings.insert("focus".to_string(), 3.5);
    assert!(validate_ratings(&catalog, &ratings).is_err());

    // Throughput below the lowest option.
    let mut ratings = full_ratings();
    ratings.insert("prThroughput".to_string(), 0.25);
    assert!(validate_ratings(&catalog, &ratings).is_err());
}

#[test]
fn test_sentinels_are_in_domain() {
    let catalog = Catalog::core4();

    let mut ratings = full_ratings();
    ratings.insert("prThroughput".to_string(), NA_SENTINEL);
    ratings.insert("timeAllocation".to_string(), NA_SENTINEL);
    ratings.insert("documentation".to_string(), LEGACY_NA_SENTINEL);
    assert!(validate_ratings(&catalog, &ratings).is_ok());

    // 9.0 is also the real top throughput answer.
    let mut ratings = full_ratings();
    ratings.insert("prThroughput".to_string(), 9.0);
    assert!(validate_ratings(&catalog, &ratings).is_ok());
}

#[test]
fn test_unknown_key_rejected() {
    let catalog = Catalog::core4();
    let mut ratings = full_ratings();
    ratings.insert("velocity".to_string(), 4.0);

    let err = validate_ratings(&catalog, &ratings).unwrap_err();
    assert_eq!(
        err.issues,
        vec![RatingIssue::UnknownKey {
            key: "velocity".to_string()
        }]
    );
}

#[test]
fn test_all_issues_collected_at_once() {
    let catalog = Catalog::core4();
    let mut ratings = full_ratings();
    ratings.remove("planning");
    ratings.insert("focus".to_string(), 0.0);
    ratings.insert("velocity".to_string(), 4.0);

    let err = validate_ratings(&catalog, &ratings).unwrap_err();
    assert_eq!(err.issues.len(), 3);
}

#[test]
fn test_effectiveness_root_is_not_answerable() {
    let catalog = Catalog::core4();
    let mut ratings = full_ratings();
    ratings.insert("developerExperience".to_string(), 4.0);
    let err = validate_ratings(&catalog, &ratings).unwrap_err();
    assert_eq!(
        err.issues,
        vec![RatingIssue::UnknownKey {
            key: "developerExperience".to_string()
        }]
    );
}
