// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix array and LCP construction.
//!
//! Arbitrary symbol sequences go through prefix doubling and Kasai; the result must be a
//! sorted permutation with exact LCP values, and the repeat count must match the
//! brute-force definition.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lcpkit::testing::{oracle_lcp, oracle_repeat_count, oracle_suffix_array};
use lcpkit::verify::check_permutation;
use lcpkit::{build_lcp_array, build_suffix_array, count_repeated_substrings};

fuzz_target!(|data: &[u8]| {
    // Cap length: the oracles are quadratic
    let data = &data[..data.len().min(256)];
    let symbols: Vec<u32> = data.iter().map(|&b| u32::from(b % 8)).collect();

    let sa = build_suffix_array(&symbols);
    check_permutation(&sa, symbols.len()).expect("suffix array must be a permutation");
    assert_eq!(sa.as_slice(), oracle_suffix_array(&symbols).as_slice());

    let lcp = build_lcp_array(&symbols, &sa);
    assert_eq!(lcp.as_slice(), oracle_lcp(&symbols, &sa).as_slice());

    // Same check through the string entry point
    let text = String::from_utf8_lossy(&data[..data.len().min(48)]).into_owned();
    match count_repeated_substrings(&text) {
        Ok(count) => assert_eq!(count, oracle_repeat_count(&text)),
        Err(e) => assert!(text.is_empty() && e.is_invalid_input()),
    }
});
