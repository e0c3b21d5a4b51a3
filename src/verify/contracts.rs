// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts for the builders.
//!
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Compare each builder against the obvious definition
//!
//! | Contract Function           | Property                                           |
//! |-----------------------------|----------------------------------------------------|
//! | `check_suffix_array_sorted` | `T[sa[i-1]..] <= T[sa[i]..]` for every rank `i`    |
//! | `check_lcp_correct`         | `lcp[0] = 0`, `lcp[i]` = brute-force common prefix |
//!
//! Both compare whole suffixes, which is quadratic on highly repetitive text, so they
//! only run for texts up to `CONTRACT_CHECK_LIMIT` symbols.

use crate::types::Symbol;

/// Longest text the debug contracts will check.
pub const CONTRACT_CHECK_LIMIT: usize = 4096;

/// Length of the common prefix of two symbol slices.
pub fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that a suffix array is sorted lexicographically.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(symbols: &[Symbol], sa: &[usize]) {
    if !cfg!(debug_assertions) || symbols.len() > CONTRACT_CHECK_LIMIT {
        return;
    }

    for i in 1..sa.len() {
        debug_assert!(
            symbols[sa[i - 1]..] <= symbols[sa[i]..],
            "Contract violation: suffix array not sorted - \
             sa[{}] = {} > sa[{}] = {}",
            i - 1,
            sa[i - 1],
            i,
            sa[i]
        );
    }
}

// ============================================================================
// LCP ARRAY CONTRACTS
// ============================================================================

/// Check that the LCP array is correct.
///
/// # Panics (debug builds only)
/// Panics if LCP values are incorrect.
#[inline]
pub fn check_lcp_correct(symbols: &[Symbol], sa: &[usize], lcp: &[usize]) {
    if !cfg!(debug_assertions) || symbols.len() > CONTRACT_CHECK_LIMIT {
        return;
    }

    debug_assert_eq!(
        lcp.len(),
        sa.len(),
        "Contract violation: lcp.len() {} != sa.len() {}",
        lcp.len(),
        sa.len()
    );

    if !lcp.is_empty() {
        debug_assert_eq!(
            lcp[0], 0,
            "Contract violation: lcp[0] = {} (expected 0)",
            lcp[0]
        );
    }

    for i in 1..sa.len() {
        let expected = common_prefix_len(&symbols[sa[i - 1]..], &symbols[sa[i]..]);
        debug_assert_eq!(
            lcp[i], expected,
            "Contract violation: lcp[{}] = {} (expected {})",
            i, lcp[i], expected
        );
    }
}
