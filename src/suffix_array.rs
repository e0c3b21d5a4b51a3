//! Suffix array construction by prefix doubling.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! h = 1  rank by first symbol          b=1 a=0 n=2 a=0 n=2 a=0
//! h = 1  sort by (rank[i], rank[i+1])  pairs: (1,0) (0,2) (2,0) (0,2) (2,0) (0,-)
//!        re-rank densely               b=2 a=1 n=3 a=1 n=3 a=0
//! h = 2  sort by (rank[i], rank[i+2])  ...
//!        re-rank densely               all distinct -> done
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! A position whose partner `i + h` falls off the end pairs with `None`, which orders
//! below every real rank: a suffix that ends sooner is smaller than one that continues.
//!
//! # Complexity
//!
//! - Time: O(n log² n) with one stable comparison sort per doubling round
//! - Space: O(n)
//!
//! Rounds stop as soon as every rank is distinct, so texts with few repeats finish after
//! one or two rounds.

use tracing::trace;

use crate::types::{SuffixArray, Symbol};
use crate::verify::contracts::check_suffix_array_sorted;

/// Build the suffix array of `symbols`.
///
/// Deterministic: the same input always yields the same array. An empty input yields an
/// empty array.
pub fn build_suffix_array(symbols: &[Symbol]) -> SuffixArray {
    let n = symbols.len();
    if n == 0 {
        return SuffixArray::default();
    }

    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank = initial_ranks(symbols);
    let mut h = 1;
    let mut rounds = 0;

    loop {
        let key = |i: usize| (rank[i], rank.get(i + h).copied());

        // Stable, so ties keep text order and the output never depends on the sort's
        // internal choices.
        sa.sort_by_key(|&i| key(i));

        let mut next = vec![0; n];
        for w in 1..n {
            next[sa[w]] = next[sa[w - 1]] + usize::from(key(sa[w]) != key(sa[w - 1]));
        }
        rank = next;
        rounds += 1;

        if rank[sa[n - 1]] == n - 1 || h >= n {
            break;
        }
        h <<= 1;
    }

    trace!(n, rounds, "suffix array built");
    check_suffix_array_sorted(symbols, &sa);
    SuffixArray::new(sa)
}

/// Dense ranks of the first symbol of every suffix.
fn initial_ranks(symbols: &[Symbol]) -> Vec<usize> {
    let mut alphabet: Vec<Symbol> = symbols.to_vec();
    alphabet.sort_unstable();
    alphabet.dedup();

    symbols
        .iter()
        .map(|s| alphabet.partition_point(|a| a < s))
        .collect()
}
