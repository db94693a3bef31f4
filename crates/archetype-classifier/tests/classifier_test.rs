use archetype_classifier::{classify, euclidean, ClassifierEngine};
use archetype_core::config::ClassifierConfig;
use archetype_core::errors::ClassificationError;
use archetype_core::{Archetype, ScoreVector, CATALOG};

fn scores(values: [f64; 8]) -> ScoreVector {
    ScoreVector::new(values).unwrap()
}

#[test]
fn foundational_challenges_exact_match() {
    let query = scores([1.0, 1.0, 1.5, 2.5, 1.0, 1.0, 3.0, 3.0]);
    let result = classify(&query, &CATALOG).unwrap();

    assert_eq!(result.archetype, "Foundational Challenges");
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.confidence, 100);
}

#[test]
fn every_catalog_profile_classifies_as_itself() {
    for archetype in &CATALOG {
        let result = classify(&archetype.profile, &CATALOG).unwrap();
        assert_eq!(result.archetype, archetype.name);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.confidence, 100);
    }
}

#[test]
fn distance_map_has_one_entry_per_archetype_in_catalog_order() {
    let query = scores([2.0; 8]);
    let result = classify(&query, &CATALOG).unwrap();

    assert_eq!(result.distances.len(), CATALOG.len());
    for (entry, archetype) in result.distances.iter().zip(CATALOG.iter()) {
        assert_eq!(entry.archetype, archetype.name);
        assert_eq!(entry.distance, euclidean(&query, &archetype.profile));
    }
}

#[test]
fn matched_distance_is_the_minimum() {
    let query = scores([3.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
    let result = classify(&query, &CATALOG).unwrap();

    let min = result
        .distances
        .iter()
        .map(|d| d.distance)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(result.distance, min);
    assert_eq!(result.distance_to(&result.archetype), Some(min));
    assert_eq!(result.archetype, "Pragmatic performers");
    assert_eq!(result.confidence, 60);
}

#[test]
fn near_miss_lowers_confidence() {
    let query = scores([3.0, 3.0, 3.0, 1.0, 3.0, 3.0, 1.0, 1.0]);
    let result = classify(&query, &CATALOG).unwrap();

    assert_eq!(result.archetype, "Harmonious high achiever");
    assert!((result.distance - 0.5_f64.sqrt()).abs() < 1e-12);
    assert_eq!(result.confidence, 87);
}

#[test]
fn far_queries_keep_confidence_low_and_non_negative() {
    let all_high = classify(&scores([4.0; 8]), &CATALOG).unwrap();
    assert_eq!(all_high.archetype, "High impact, low cadence");
    assert_eq!(all_high.confidence, 25);

    let all_low = classify(&scores([0.0; 8]), &CATALOG).unwrap();
    assert_eq!(all_low.archetype, "Legacy bottleneck");
    assert_eq!(all_low.confidence, 30);
}

#[test]
fn ties_resolve_to_first_in_catalog_order() {
    let catalog = vec![
        Archetype::new("Low", scores([1.0; 8])),
        Archetype::new("High", scores([3.0; 8])),
    ];
    let result = classify(&scores([2.0; 8]), &catalog).unwrap();
    assert_eq!(result.archetype, "Low");
    assert_eq!(result.confidence, 0);

    let reversed: Vec<Archetype> = catalog.into_iter().rev().collect();
    let result = classify(&scores([2.0; 8]), &reversed).unwrap();
    assert_eq!(result.archetype, "High");
}

#[test]
fn all_zero_distances_report_full_confidence() {
    let catalog = vec![
        Archetype::new("Twin A", scores([2.0; 8])),
        Archetype::new("Twin B", scores([2.0; 8])),
    ];
    let result = classify(&scores([2.0; 8]), &catalog).unwrap();
    assert_eq!(result.archetype, "Twin A");
    assert_eq!(result.confidence, 100);
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(
        classify(&scores([2.0; 8]), &[]).unwrap_err(),
        ClassificationError::EmptyCatalog
    );
    assert!(ClassifierEngine::with_catalog(ClassifierConfig::default(), vec![]).is_err());
}

#[test]
fn ranked_orders_by_distance() {
    let result = classify(&scores([2.0; 8]), &CATALOG).unwrap();
    let ranked: Vec<&str> = result
        .ranked()
        .iter()
        .take(3)
        .map(|d| d.archetype.as_str())
        .collect();
    assert_eq!(
        ranked,
        [
            "Pragmatic performers",
            "Stable and methodical",
            "Constrained by process"
        ]
    );
}

#[test]
fn engine_classify_matches_free_function() {
    let engine = ClassifierEngine::default();
    let query = scores([2.0, 2.0, 1.5, 2.0, 2.5, 2.5, 2.0, 1.5]);
    assert_eq!(
        engine.classify(&query).unwrap(),
        classify(&query, &CATALOG).unwrap()
    );
    assert_eq!(engine.catalog().len(), 7);
    assert!(engine.profile("Stable and methodical").is_some());
    assert!(engine.profile("Unknown").is_none());
}

#[test]
fn duplicate_archetype_names_are_rejected() {
    let catalog = vec![
        Archetype::new("Twin", scores([0.0; 8])),
        Archetype::new("Twin", scores([3.0; 8])),
        Archetype::new("Other", scores([4.0; 8])),
    ];
    let err = ClassifierEngine::with_catalog(ClassifierConfig::default(), catalog).unwrap_err();
    assert_eq!(
        err,
        ClassificationError::DuplicateArchetype {
            name: "Twin".into()
        }
    );
}

#[test]
fn custom_catalog_match_carries_its_own_profile() {
    let catalog = vec![
        Archetype::new("Low", scores([0.0; 8])),
        Archetype::new("Mid", scores([3.0; 8])),
        Archetype::new("High", scores([4.0; 8])),
    ];
    let engine = ClassifierEngine::with_catalog(ClassifierConfig::default(), catalog).unwrap();
    let query = scores([3.0; 8]);
    let entry = engine
        .evaluate(&archetype_core::TeamRecord::new("Squad", query))
        .unwrap();

    assert_eq!(entry.result.archetype, "Mid");
    assert_eq!(entry.archetype_profile, query);
    assert_eq!(entry.justification.strong_matches, 8);
}
