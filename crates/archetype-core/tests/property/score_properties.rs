use archetype_core::{Dimension, ScoreVector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_values_are_accepted_unchanged(values in prop::array::uniform8(0.0f64..=4.0)) {
        let v = ScoreVector::new(values).unwrap();
        prop_assert_eq!(v.to_array(), values);
    }

    #[test]
    fn one_out_of_range_value_is_rejected(
        idx in 0usize..8,
        bad in prop_oneof![-100.0f64..-0.001, 4.001f64..100.0],
    ) {
        let mut values = [2.0; 8];
        values[idx] = bad;
        prop_assert!(ScoreVector::new(values).is_err());
    }

    #[test]
    fn with_only_touches_its_dimension(idx in 0usize..8, score in 0.0f64..=4.0) {
        let base = ScoreVector::uniform(1.0).unwrap();
        let dim = Dimension::ALL[idx];
        let changed = base.with(dim, score).unwrap();
        for d in Dimension::ALL {
            let expected = if d == dim { score } else { 1.0 };
            prop_assert_eq!(changed.get(d), expected);
        }
    }
}
