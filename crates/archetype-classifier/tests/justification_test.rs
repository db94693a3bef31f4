use archetype_classifier::{classify, justify, ClassifierEngine};
use archetype_core::config::ClassifierConfig;
use archetype_core::errors::ClassificationError;
use archetype_core::{Dimension, ScoreVector, CATALOG};

fn scores(values: [f64; 8]) -> ScoreVector {
    ScoreVector::new(values).unwrap()
}

#[test]
fn exact_match_justification_text() {
    let query = scores([1.0, 1.0, 1.5, 2.5, 1.0, 1.0, 3.0, 3.0]);
    let engine = ClassifierEngine::default();
    let result = engine.classify(&query).unwrap();
    let justification = engine.justify(&query, &result).unwrap();

    assert_eq!(justification.strong_matches, 8);
    assert!(justification.strong_differences.is_empty());
    assert_eq!(
        justification.runner_ups,
        ["Constrained by process", "Legacy bottleneck"]
    );
    assert_eq!(
        justification.text,
        "Foundational Challenges is the best match. Your team's profile aligns well \
         with this archetype profile, with strong alignment on 8 dimensions. \
         Other potential matches: Constrained by process, Legacy bottleneck."
    );
}

#[test]
fn justification_always_names_the_match() {
    let engine = ClassifierEngine::default();
    for values in [[0.0; 8], [4.0; 8], [2.0; 8], [1.0, 3.0, 0.5, 4.0, 2.0, 1.5, 0.0, 3.5]] {
        let query = scores(values);
        let result = engine.classify(&query).unwrap();
        let justification = engine.justify(&query, &result).unwrap();
        assert!(!justification.text.is_empty());
        assert!(justification.text.contains(&result.archetype));
        assert_eq!(justification.archetype, result.archetype);
    }
}

#[test]
fn runner_up_ties_keep_catalog_order() {
    // Constrained by process and Harmonious high achiever are both sqrt(30.5) away.
    let query = scores([4.0; 8]);
    let result = classify(&query, &CATALOG).unwrap();
    let justification = justify(
        &query,
        &result.archetype,
        &result.distances,
        &CATALOG,
        &ClassifierConfig::default(),
    )
    .unwrap();

    assert_eq!(
        justification.runner_ups,
        ["Constrained by process", "Harmonious high achiever"]
    );
}

#[test]
fn strong_differences_are_collected_but_not_surfaced_by_default() {
    let query = scores([4.0; 8]);
    let engine = ClassifierEngine::default();
    let result = engine.classify(&query).unwrap();
    let justification = engine.justify(&query, &result).unwrap();

    // Against High impact, low cadence: only instability (4 vs 4) is within 0.5.
    assert_eq!(justification.strong_matches, 1);
    let dims: Vec<Dimension> = justification
        .strong_differences
        .iter()
        .map(|d| d.dimension)
        .collect();
    assert_eq!(
        dims,
        [
            Dimension::SoftwareDeliveryThroughput,
            Dimension::Friction,
            Dimension::Burnout
        ]
    );
    assert!(!justification.text.contains("Notable differences"));
}

#[test]
fn strong_differences_surface_when_enabled() {
    let config = ClassifierConfig {
        surface_strong_differences: true,
        ..Default::default()
    };
    let engine = ClassifierEngine::new(config);
    let query = scores([4.0; 8]);
    let result = engine.classify(&query).unwrap();
    let justification = engine.justify(&query, &result).unwrap();

    assert!(justification.text.ends_with(
        "Notable differences: Software Delivery Throughput: 4 vs 2; Friction: 4 vs 1; Burnout: 4 vs 1."
    ));
}

#[test]
fn runner_up_count_is_configurable() {
    let config = ClassifierConfig {
        runner_up_count: 0,
        ..Default::default()
    };
    let engine = ClassifierEngine::new(config);
    let query = scores([2.0; 8]);
    let result = engine.classify(&query).unwrap();
    let justification = engine.justify(&query, &result).unwrap();

    assert!(justification.runner_ups.is_empty());
    assert!(!justification.text.contains("Other potential matches"));
    assert!(justification.text.ends_with("dimensions."));
}

#[test]
fn unknown_archetype_is_an_error() {
    let query = scores([2.0; 8]);
    let result = classify(&query, &CATALOG).unwrap();
    let err = justify(
        &query,
        "Not an archetype",
        &result.distances,
        &CATALOG,
        &ClassifierConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ClassificationError::UnknownArchetype {
            name: "Not an archetype".into()
        }
    );
}
