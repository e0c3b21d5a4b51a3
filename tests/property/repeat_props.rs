//! Repeated-substring count property tests.

use lcpkit::testing::{distinct_substrings, oracle_repeat_count};
use lcpkit::{count_repeated_substrings, count_repeated_substrings_batch};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_count_matches_oracle(s in "[ab]{1,20}") {
        prop_assert_eq!(count_repeated_substrings(&s).unwrap(), oracle_repeat_count(&s));
    }

    #[test]
    fn prop_count_matches_oracle_unicode(s in "[aé日]{1,12}") {
        prop_assert_eq!(count_repeated_substrings(&s).unwrap(), oracle_repeat_count(&s));
    }

    /// Repeats are a subset of the distinct substrings, and doubling a string makes
    /// every substring of the input repeat.
    #[test]
    fn prop_count_bounds(s in "[abc]{1,10}") {
        let distinct = distinct_substrings(&s).len() as u64;
        prop_assert!(count_repeated_substrings(&s).unwrap() <= distinct);

        let doubled = format!("{}{}", s, s);
        prop_assert!(count_repeated_substrings(&doubled).unwrap() >= distinct);
    }

    #[test]
    fn prop_batch_matches_single(strings in prop::collection::vec("[ab]{1,10}", 0..8)) {
        let batch = count_repeated_substrings_batch(&strings);
        prop_assert_eq!(batch.len(), strings.len());
        for (s, result) in strings.iter().zip(batch) {
            prop_assert_eq!(result.unwrap(), count_repeated_substrings(s).unwrap());
        }
    }
}
