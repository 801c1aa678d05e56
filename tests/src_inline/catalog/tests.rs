use super::*;

#[test]
fn test_root_questions_in_insertion_order() {
    let catalog = Catalog::core4();
    assert_eq!(
        catalog.question_keys(),
        vec![
            "prThroughput",
            "changeFailureRate",
            "timeAllocation",
            "developerExperience",
        ]
    );
}

#[test]
fn test_required_keys_expand_effectiveness_subs() {
    let catalog = Catalog::core4();
    let keys = catalog.required_keys();
    assert_eq!(keys.len(), 13);
    assert_eq!(&keys[..3], &["prThroughput", "changeFailureRate", "timeAllocation"]);
    assert_eq!(keys[3], "documentation");
    assert_eq!(keys[12], "maintainability");
    // The container itself is never answered.
    assert!(!keys.contains(&"developerExperience"));
}

#[test]
fn test_lookup() {
    let catalog = Catalog::core4();
    let q = catalog.question("timeAllocation").unwrap();
    assert_eq!(q.dimension, Dimension::Impact);
    assert!(!q.is_effectiveness());

    assert!(catalog.question("nope").is_none());
    assert!(catalog.require("nope").is_err());
}

#[test]
fn test_effectiveness_root_shape() {
    let catalog = Catalog::core4();
    let q = catalog.question("developerExperience").unwrap();
    assert!(q.is_effectiveness());
    assert_eq!(q.sub_questions().len(), 10);
    assert_eq!(q.sub_questions()[0].key, "documentation");
}

#[test]
fn test_question_for_answer() {
    let catalog = Catalog::core4();

    // Scale keys resolve to themselves.
    let q = catalog.question_for_answer("prThroughput").unwrap();
    assert_eq!(q.key, "prThroughput");

    // Sub-keys resolve to the effectiveness root.
    let q = catalog.question_for_answer("incidents").unwrap();
    assert_eq!(q.key, "developerExperience");

    // The root is a container, not an answerable key.
    assert!(catalog.question_for_answer("developerExperience").is_none());
    assert!(catalog.question_for_answer("nope").is_none());
}

#[test]
fn test_benchmarks_per_dimension() {
    let catalog = Catalog::core4();
    let speed = catalog.benchmarks_for(Dimension::Speed).unwrap();
    assert_eq!(speed.p90, 4.3);
    assert_eq!(speed.p50, 3.5);

    let quality = catalog.benchmarks_for(Dimension::Quality).unwrap();
    // Stored pre-inverted: lower failure ordinal mean is better.
    assert!(quality.p90 < quality.p50);
}
