//! Segment tree agrees with a linear scan on random ranges.

use lcpkit::RangeMin;
use proptest::prelude::*;

fn values_and_range() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
    prop::collection::vec(0usize..1000, 1..80).prop_flat_map(|values| {
        let n = values.len();
        (Just(values), 0..n)
            .prop_flat_map(move |(values, l)| (Just(values), Just(l), l + 1..=n))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_query_matches_linear_scan((values, l, r) in values_and_range()) {
        let tree = RangeMin::build(&values);
        let expected = *values[l..r].iter().min().unwrap();
        prop_assert_eq!(tree.query(l, r).unwrap(), expected);
    }

    #[test]
    fn prop_update_matches_linear_scan(
        (mut values, l, r) in values_and_range(),
        updates in prop::collection::vec((any::<prop::sample::Index>(), 0usize..1000), 0..10),
    ) {
        let mut tree = RangeMin::build(&values);
        for (index, value) in updates {
            let i = index.index(values.len());
            tree.update(i, value).unwrap();
            values[i] = values[i].min(value);
        }
        let expected = *values[l..r].iter().min().unwrap();
        prop_assert_eq!(tree.query(l, r).unwrap(), expected);
    }

    #[test]
    fn prop_empty_range_is_an_error(values in prop::collection::vec(0usize..10, 0..20), l in 0usize..25) {
        let tree = RangeMin::build(&values);
        prop_assert!(tree.query(l, l).is_err());
        prop_assert!(tree.query(l, values.len() + 1).is_err());
    }
}
