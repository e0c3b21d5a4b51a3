// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distinct repeated substrings from the LCP array.
//!
//! Every substring that occurs at least twice is a common prefix of two rank-adjacent
//! suffixes. Walking the LCP array in rank order, a rise from `prev` to `v` introduces
//! exactly `v - prev` prefixes that no earlier rank pair has shared; a fall introduces
//! none.
//!
//! ```text
//! "aabaab"   rank  suffix   lcp   new repeats
//!             0    aab       0
//!             1    aabaab    3    a, aa, aab
//!             2    ab        1
//!             3    abaab     2    ab
//!             4    b         0
//!             5    baab      1    b
//!                                 ─────────── 5
//! ```

use crate::types::LcpArray;

/// Number of distinct substrings occurring more than once.
pub fn count_repeats(lcp: &LcpArray) -> u64 {
    let mut total = 0u64;
    let mut prev = 0;
    for &v in lcp.iter() {
        if v > prev {
            total += (v - prev) as u64;
        }
        prev = v;
    }
    total
}
