//! End-to-end query behaviour on the judge samples and edge cases.

use super::common::{sorted, DISJOINT, LIFE_FORMS};
use std::time::{Duration, Instant};

use lcpkit::{
    count_repeated_substrings, count_repeated_substrings_batch, find_majority_common_substrings,
    find_majority_common_substrings_batch, find_maximal_k_common_substrings,
    find_maximal_k_common_substrings_batch, majority, Error,
};

// ============================================================================
// REPEATED SUBSTRINGS
// ============================================================================

#[test]
fn test_repeat_counts_from_judge_sample() {
    assert_eq!(count_repeated_substrings("aabaab").unwrap(), 5);
    assert_eq!(count_repeated_substrings("abcdef").unwrap(), 0);
}

#[test]
fn test_repeat_counts_small_cases() {
    assert_eq!(count_repeated_substrings("a").unwrap(), 0);
    assert_eq!(count_repeated_substrings("aa").unwrap(), 1);
    assert_eq!(count_repeated_substrings("aaaa").unwrap(), 3);
    assert_eq!(count_repeated_substrings("abab").unwrap(), 3);
}

#[test]
fn test_repeat_count_rejects_empty_string() {
    let err = count_repeated_substrings("").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_repeat_batch_keeps_order_and_isolates_failures() {
    let results = count_repeated_substrings_batch(&["aabaab", "", "abcdef"]);
    assert_eq!(results.len(), 3);
    assert_eq!(*results[0].as_ref().unwrap(), 5);
    assert!(results[1].is_err());
    assert_eq!(*results[2].as_ref().unwrap(), 0);
}

// ============================================================================
// K-COMMON SUBSTRINGS
// ============================================================================

#[test]
fn test_life_forms_majority() {
    let found = find_maximal_k_common_substrings(&LIFE_FORMS, 2).unwrap();
    assert_eq!(found.length, 6);
    assert_eq!(sorted(&found), vec!["bcdefg", "cdefgh"]);

    assert_eq!(found, find_majority_common_substrings(&LIFE_FORMS).unwrap());
}

#[test]
fn test_life_forms_all_three() {
    let found = find_maximal_k_common_substrings(&LIFE_FORMS, 3).unwrap();
    assert_eq!(found.length, 5);
    assert_eq!(sorted(&found), vec!["cdefg"]);
}

#[test]
fn test_disjoint_strings_share_nothing() {
    let found = find_maximal_k_common_substrings(&DISJOINT, 2).unwrap();
    assert!(found.is_empty());
    assert_eq!(found.length, 0);
}

#[test]
fn test_threshold_above_string_count_is_empty() {
    let found = find_maximal_k_common_substrings(&["abc", "abc"], 3).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_repeats_inside_one_string_do_not_count() {
    // "aa" occurs twice in the first string but only once overall
    let found = find_maximal_k_common_substrings(&["aaaa", "ab"], 2).unwrap();
    assert_eq!(sorted(&found), vec!["a"]);
}

#[test]
fn test_ties_are_sorted_and_deduplicated() {
    let found = find_maximal_k_common_substrings(&["ab_cd", "cd-ab", "abcd"], 2).unwrap();
    assert_eq!(found.length, 2);
    assert_eq!(sorted(&found), vec!["ab", "cd"]);
}

#[test]
fn test_empty_member_strings() {
    let found = find_maximal_k_common_substrings(&["", "xyz", "yz"], 2).unwrap();
    assert_eq!(sorted(&found), vec!["yz"]);

    let none = find_maximal_k_common_substrings(&["", ""], 2).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_invalid_common_queries() {
    assert!(find_maximal_k_common_substrings(&["abc"], 2)
        .unwrap_err()
        .is_invalid_input());
    assert!(find_maximal_k_common_substrings(&["abc", "abd"], 1)
        .unwrap_err()
        .is_invalid_input());
    let none: [&str; 0] = [];
    assert!(find_maximal_k_common_substrings(&none, 2)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_majority_threshold() {
    assert_eq!(majority(1), 1);
    assert_eq!(majority(2), 2);
    assert_eq!(majority(3), 2);
    assert_eq!(majority(4), 3);
    assert_eq!(majority(100), 51);
}

#[test]
fn test_majority_single_string_is_itself() {
    let found = find_majority_common_substrings(&["hello"]).unwrap();
    assert_eq!(found.length, 5);
    assert_eq!(sorted(&found), vec!["hello"]);

    assert!(find_majority_common_substrings(&[""]).unwrap().is_empty());
}

#[test]
fn test_common_batch_keeps_order() {
    let sets = vec![
        LIFE_FORMS.to_vec(),
        DISJOINT.to_vec(),
        vec!["only one"],
    ];
    let results = find_maximal_k_common_substrings_batch(&sets, 2);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().length, 6);
    assert!(results[1].as_ref().unwrap().is_empty());
    assert!(results[2].is_err());
}

#[test]
fn test_results_serialize_as_sorted_json() {
    let found = find_maximal_k_common_substrings(&LIFE_FORMS, 2).unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "length": 6, "substrings": ["bcdefg", "cdefgh"] })
    );
}

#[test]
fn test_majority_batch_matches_single_queries() {
    let sets = vec![LIFE_FORMS.to_vec(), DISJOINT.to_vec(), vec!["hello"], vec![]];
    let results = find_majority_common_substrings_batch(&sets);
    assert_eq!(results.len(), 4);
    assert_eq!(sorted(results[0].as_ref().unwrap()), vec!["bcdefg", "cdefgh"]);
    assert!(results[1].as_ref().unwrap().is_empty());
    assert_eq!(sorted(results[2].as_ref().unwrap()), vec!["hello"]);
    assert!(results[3].as_ref().unwrap_err().is_invalid_input());
}

// ============================================================================
// SCALE
// ============================================================================

/// Identical unary strings push the best length up one step at a time; the answer must
/// still be materialized once, not once per improvement.
#[test]
fn test_long_unary_strings_stay_fast() {
    let m = 20_000;
    let a = "a".repeat(m);

    let start = Instant::now();
    let found = find_maximal_k_common_substrings(&[a.as_str(), a.as_str()], 2).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(found.length, m);
    assert_eq!(found.len(), 1);
    assert!(found.substrings.contains(&a));
    assert!(
        elapsed < Duration::from_secs(10),
        "k-common query on two strings of {} characters took {:?}",
        m,
        elapsed
    );
}
