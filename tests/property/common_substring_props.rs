//! k-common substring property tests.
//!
//! Inputs stay small (a handful of strings, a few characters each) so the exhaustive
//! oracle can enumerate every substring.

use std::collections::HashMap;

use super::common::sorted;
use lcpkit::testing::{oracle_k_common, substring_string_counts};
use lcpkit::{
    find_majority_common_substrings, find_maximal_k_common_substrings,
    find_maximal_k_common_substrings_batch, majority,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Two to five strings over a three-letter alphabet, empty strings included.
fn string_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{0,4}", 2..6)
}

fn string_set_and_k() -> impl Strategy<Value = (Vec<String>, usize)> {
    string_set().prop_flat_map(|strings| {
        let n = strings.len();
        (Just(strings), 2..=n + 1)
    })
}

fn shared_by(counts: &HashMap<String, usize>, substring: &str) -> usize {
    counts.get(substring).copied().unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_matches_exhaustive_oracle((strings, k) in string_set_and_k()) {
        let found = find_maximal_k_common_substrings(&strings, k).unwrap();
        prop_assert_eq!(found, oracle_k_common(&strings, k));
    }

    /// Every reported substring has the reported length and is shared by `k` strings;
    /// nothing longer is.
    #[test]
    fn prop_results_are_maximal((strings, k) in string_set_and_k()) {
        let found = find_maximal_k_common_substrings(&strings, k).unwrap();
        let counts = substring_string_counts(&strings);

        for substring in sorted(&found) {
            prop_assert_eq!(substring.chars().count(), found.length);
            prop_assert!(shared_by(&counts, substring) >= k);
        }
        let longer = counts
            .iter()
            .any(|(s, &count)| count >= k && s.chars().count() > found.length);
        prop_assert!(!longer);
        prop_assert_eq!(found.is_empty(), found.length == 0);
    }

    /// Raising the threshold never lengthens the answer.
    #[test]
    fn prop_length_monotone_in_k(strings in string_set()) {
        let lengths: Vec<usize> = (2..=strings.len())
            .map(|k| find_maximal_k_common_substrings(&strings, k).unwrap().length)
            .collect();
        prop_assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// Order of the input strings does not change the answer.
    #[test]
    fn prop_input_order_irrelevant((strings, k) in string_set_and_k()) {
        let mut reversed = strings.clone();
        reversed.reverse();
        prop_assert_eq!(
            find_maximal_k_common_substrings(&strings, k).unwrap(),
            find_maximal_k_common_substrings(&reversed, k).unwrap()
        );
    }

    #[test]
    fn prop_majority_uses_majority_threshold(strings in string_set()) {
        prop_assert_eq!(
            find_majority_common_substrings(&strings).unwrap(),
            find_maximal_k_common_substrings(&strings, majority(strings.len())).unwrap()
        );
    }

    #[test]
    fn prop_batch_matches_single(sets in prop::collection::vec(string_set(), 0..5)) {
        let batch = find_maximal_k_common_substrings_batch(&sets, 2);
        prop_assert_eq!(batch.len(), sets.len());
        for (set, result) in sets.iter().zip(batch) {
            prop_assert_eq!(result.unwrap(), find_maximal_k_common_substrings(set, 2).unwrap());
        }
    }
}
