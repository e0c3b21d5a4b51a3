//! LCP array construction (Kasai et al., 2001).
//!
//! Walks text positions in text order, not rank order. If the suffix at `i` shares `k`
//! symbols with its rank predecessor, the suffix at `i + 1` shares at least `k - 1` with
//! its own predecessor, so the running match length only ever drops by one between
//! steps. The total number of extensions is bounded by `2n`, which makes the pass linear.
//!
//! # References
//!
//! - Kasai, Lee, Arimura, Arikawa, Park (2001): "Linear-Time Longest-Common-Prefix
//!   Computation in Suffix Arrays and Its Applications"

use tracing::trace;

use crate::types::{LcpArray, SuffixArray, Symbol};
use crate::verify::contracts::check_lcp_correct;

/// Build the LCP array for `symbols` given its suffix array.
pub fn build_lcp_array(symbols: &[Symbol], sa: &SuffixArray) -> LcpArray {
    let n = sa.len();
    let rank = sa.rank_of();
    let mut lcp = vec![0; n];
    let mut k = 0;

    for i in 0..n {
        if rank[i] == 0 {
            k = 0;
            continue;
        }
        let j = sa[rank[i] - 1];
        while i + k < n && j + k < n && symbols[i + k] == symbols[j + k] {
            k += 1;
        }
        lcp[rank[i]] = k;
        k = k.saturating_sub(1);
    }

    trace!(n, max = lcp.iter().max().copied().unwrap_or(0), "lcp array built");
    check_lcp_correct(symbols, sa, &lcp);
    LcpArray::new(lcp)
}
