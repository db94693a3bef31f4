use archetype_classifier::{classify, euclidean, ClassifierEngine};
use archetype_core::{ScoreVector, TeamRecord, CATALOG};
use proptest::prelude::*;

fn score_vector() -> impl Strategy<Value = ScoreVector> {
    prop::array::uniform8(0.0f64..=4.0).prop_map(|v| ScoreVector::new(v).unwrap())
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(v in score_vector()) {
        prop_assert_eq!(euclidean(&v, &v), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in score_vector(), b in score_vector()) {
        prop_assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    #[test]
    fn distance_is_non_negative(a in score_vector(), b in score_vector()) {
        prop_assert!(euclidean(&a, &b) >= 0.0);
    }

    #[test]
    fn triangle_inequality(a in score_vector(), b in score_vector(), c in score_vector()) {
        let direct = euclidean(&a, &c);
        let via = euclidean(&a, &b) + euclidean(&b, &c);
        prop_assert!(direct <= via + 1e-9, "{} > {}", direct, via);
    }

    #[test]
    fn confidence_is_bounded(v in score_vector()) {
        let result = classify(&v, &CATALOG).unwrap();
        prop_assert!(result.confidence <= 100);
    }

    #[test]
    fn match_is_minimum_distance(v in score_vector()) {
        let result = classify(&v, &CATALOG).unwrap();
        prop_assert_eq!(result.distances.len(), CATALOG.len());
        for d in &result.distances {
            prop_assert!(result.distance <= d.distance);
        }
        prop_assert_eq!(result.distance_to(&result.archetype), Some(result.distance));
    }

    #[test]
    fn justification_contains_match(v in score_vector()) {
        let engine = ClassifierEngine::default();
        let entry = engine.evaluate(&TeamRecord::new("T", v)).unwrap();
        prop_assert!(!entry.justification.text.is_empty());
        prop_assert!(entry.justification.text.contains(&entry.result.archetype));
        prop_assert!(entry.justification.runner_ups.len() <= 2);
        prop_assert!(!entry.justification.runner_ups.contains(&entry.result.archetype));
    }

    #[test]
    fn batch_length_and_order(vs in prop::collection::vec(score_vector(), 0..20)) {
        let records: Vec<TeamRecord> = vs
            .into_iter()
            .enumerate()
            .map(|(i, v)| TeamRecord::new(format!("team-{i}"), v))
            .collect();
        let entries = ClassifierEngine::default().run_batch(&records).unwrap();
        prop_assert_eq!(entries.len(), records.len());
        for (entry, record) in entries.iter().zip(&records) {
            prop_assert_eq!(&entry.team.name, &record.name);
        }
    }
}
