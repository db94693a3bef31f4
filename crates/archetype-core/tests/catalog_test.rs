use archetype_core::archetype::{self, Archetype, CATALOG};
use archetype_core::constants::{ARCHETYPE_COUNT, SCORE_MAX, SCORE_MIN};
use archetype_core::{Dimension, ScoreVector};

#[test]
fn catalog_holds_seven_archetypes() {
    assert_eq!(CATALOG.len(), ARCHETYPE_COUNT);
}

#[test]
fn catalog_names_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn catalog_profiles_are_in_range() {
    for a in &CATALOG {
        for (d, v) in a.profile.iter() {
            assert!(
                (SCORE_MIN..=SCORE_MAX).contains(&v),
                "{} {} = {}",
                a.name,
                d,
                v
            );
        }
    }
}

#[test]
fn catalog_order_is_stable() {
    let names: Vec<&str> = CATALOG.iter().map(|a| &*a.name).collect();
    assert_eq!(
        names,
        [
            "Foundational Challenges",
            "Legacy bottleneck",
            "Constrained by process",
            "High impact, low cadence",
            "Stable and methodical",
            "Pragmatic performers",
            "Harmonious high achiever",
        ]
    );
}

#[test]
fn foundational_challenges_profile() {
    let fc = archetype::find(&CATALOG, "Foundational Challenges").unwrap();
    assert_eq!(
        fc.profile.to_array(),
        [1.0, 1.0, 1.5, 2.5, 1.0, 1.0, 3.0, 3.0]
    );
    assert_eq!(fc.profile.get(Dimension::Burnout), 3.0);
}

#[test]
fn find_is_exact_match() {
    assert!(archetype::find(&CATALOG, "legacy bottleneck").is_none());
    assert!(archetype::find(&CATALOG, "Legacy bottleneck").is_some());
}

#[test]
fn custom_archetype_accepts_owned_name() {
    let a = Archetype::new(
        format!("Custom {}", 1),
        ScoreVector::uniform(2.0).unwrap(),
    );
    assert_eq!(a.name, "Custom 1");
}
