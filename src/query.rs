//! Public query operations.
//!
//! Each operation validates its input, then runs the pipeline to completion:
//!
//! ```text
//! strings ──▶ Text ──▶ SuffixArray ──▶ LcpArray ──┬──▶ count_repeats          (one string)
//!                                                 └──▶ RangeMin ──▶ window scan (k-common)
//! ```
//!
//! A query owns every structure it builds and drops them when it returns, so queries are
//! independent and the batch forms can run them on separate threads without locking.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::lcp::build_lcp_array;
use crate::repeats::count_repeats;
use crate::suffix_array::build_suffix_array;
use crate::text::{build_colored_text, build_plain_text};
use crate::types::CommonSubstrings;
use crate::verify::check_permutation;
use crate::window::scan_common_substrings;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Count the distinct substrings of `s` that occur more than once.
///
/// ```
/// assert_eq!(lcpkit::count_repeated_substrings("aabaab").unwrap(), 5);
/// assert_eq!(lcpkit::count_repeated_substrings("abcdef").unwrap(), 0);
/// ```
pub fn count_repeated_substrings(s: &str) -> Result<u64> {
    let text = build_plain_text(s)?;
    debug!(len = text.len(), "counting repeated substrings");

    let sa = build_suffix_array(text.symbols());
    check_permutation(&sa, text.len())?;
    let lcp = build_lcp_array(text.symbols(), &sa);

    Ok(count_repeats(&lcp))
}

/// Find the longest substrings that occur in at least `k` of `strings`.
///
/// Needs at least two strings and `k >= 2`. An empty result means no substring is shared
/// by `k` strings.
///
/// ```
/// let found = lcpkit::find_maximal_k_common_substrings(&["abcdefg", "bcdefgh", "cdefghi"], 2)
///     .unwrap();
/// assert_eq!(found.iter().collect::<Vec<_>>(), vec!["bcdefg", "cdefgh"]);
/// ```
pub fn find_maximal_k_common_substrings<S: AsRef<str>>(
    strings: &[S],
    k: usize,
) -> Result<CommonSubstrings> {
    let text = build_colored_text(strings, k)?;
    debug!(
        strings = strings.len(),
        k,
        len = text.len(),
        "finding k-common substrings"
    );

    let sa = build_suffix_array(text.symbols());
    check_permutation(&sa, text.len())?;
    let lcp = build_lcp_array(text.symbols(), &sa);

    scan_common_substrings(&text, &sa, &lcp, k)
}

/// Find the longest substrings shared by more than half of `strings`.
///
/// Uses `k = n / 2 + 1`. A single string is shared by all (one) of the inputs, so the
/// answer is the string itself; an empty single string has no answer.
pub fn find_majority_common_substrings<S: AsRef<str>>(strings: &[S]) -> Result<CommonSubstrings> {
    if let [only] = strings {
        let only = only.as_ref();
        if only.is_empty() {
            return Ok(CommonSubstrings::default());
        }
        return Ok(CommonSubstrings {
            length: only.chars().count(),
            substrings: BTreeSet::from([only.to_string()]),
        });
    }
    find_maximal_k_common_substrings(strings, majority(strings.len()))
}

/// Smallest count that is more than half of `n`.
pub fn majority(n: usize) -> usize {
    n / 2 + 1
}

// =============================================================================
// BATCH
// =============================================================================

/// Run `count_repeated_substrings` over many strings.
///
/// Results keep input order. With the `parallel` feature, strings are processed on the
/// rayon pool.
pub fn count_repeated_substrings_batch<S>(strings: &[S]) -> Vec<Result<u64>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        strings
            .par_iter()
            .map(|s| count_repeated_substrings(s.as_ref()))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        strings
            .iter()
            .map(|s| count_repeated_substrings(s.as_ref()))
            .collect()
    }
}

/// Run `find_maximal_k_common_substrings` over many string sets with the same `k`.
///
/// Results keep input order; a failing set does not affect the others.
pub fn find_maximal_k_common_substrings_batch<S>(
    sets: &[Vec<S>],
    k: usize,
) -> Vec<Result<CommonSubstrings>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        sets.par_iter()
            .map(|set| find_maximal_k_common_substrings(set, k))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sets.iter()
            .map(|set| find_maximal_k_common_substrings(set, k))
            .collect()
    }
}

/// Run `find_majority_common_substrings` over many string sets.
///
/// Each set gets its own threshold `majority(set.len())`. Results keep input order.
pub fn find_majority_common_substrings_batch<S>(sets: &[Vec<S>]) -> Vec<Result<CommonSubstrings>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        sets.par_iter()
            .map(|set| find_majority_common_substrings(set))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sets.iter()
            .map(|set| find_majority_common_substrings(set))
            .collect()
    }
}
