//! Brute-force oracles shared across unit, property, and fuzz tests.
//!
//! This module is always compiled but hidden from documentation. Every function here is
//! the slow, obviously-correct definition of something the pipeline computes quickly;
//! when the two disagree, the oracle is right.

#![doc(hidden)]

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{CommonSubstrings, Symbol};
use crate::verify::contracts::common_prefix_len;

/// Sort positions by comparing whole suffixes. O(n² log n).
pub fn oracle_suffix_array(symbols: &[Symbol]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..symbols.len()).collect();
    positions.sort_by(|&i, &j| symbols[i..].cmp(&symbols[j..]));
    positions
}

/// LCP by comparing each rank-adjacent pair directly.
pub fn oracle_lcp(symbols: &[Symbol], sa: &[usize]) -> Vec<usize> {
    (0..sa.len())
        .map(|i| {
            if i == 0 {
                0
            } else {
                common_prefix_len(&symbols[sa[i - 1]..], &symbols[sa[i]..])
            }
        })
        .collect()
}

/// Every distinct non-empty substring of `s`.
pub fn distinct_substrings(s: &str) -> HashSet<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut found = HashSet::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            found.insert(chars[start..end].iter().collect());
        }
    }
    found
}

/// Count distinct substrings with at least two (possibly overlapping) occurrences.
pub fn oracle_repeat_count(s: &str) -> u64 {
    let chars: Vec<char> = s.chars().collect();
    let mut occurrences: HashMap<&[char], usize> = HashMap::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            *occurrences.entry(&chars[start..end]).or_default() += 1;
        }
    }
    occurrences.values().filter(|&&count| count >= 2).count() as u64
}

/// Number of `strings` containing each distinct substring.
pub fn substring_string_counts<S: AsRef<str>>(strings: &[S]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for s in strings {
        for substring in distinct_substrings(s.as_ref()) {
            *counts.entry(substring).or_default() += 1;
        }
    }
    counts
}

/// Longest substrings present in at least `k` of `strings`, by exhaustive enumeration.
pub fn oracle_k_common<S: AsRef<str>>(strings: &[S], k: usize) -> CommonSubstrings {
    let counts = substring_string_counts(strings);
    let shared: Vec<&String> = counts
        .iter()
        .filter(|&(_, &count)| count >= k)
        .map(|(substring, _)| substring)
        .collect();

    let length = shared
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let substrings: BTreeSet<String> = shared
        .into_iter()
        .filter(|s| s.chars().count() == length)
        .cloned()
        .collect();

    CommonSubstrings { length, substrings }
}
