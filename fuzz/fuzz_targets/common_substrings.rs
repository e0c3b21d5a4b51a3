// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the k-common substring query.
//!
//! Small string sets are compared against exhaustive enumeration. Invalid arguments must
//! come back as `InvalidInput`, never as a panic or an internal error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lcpkit::find_maximal_k_common_substrings;
use lcpkit::testing::oracle_k_common;

#[derive(Debug, Arbitrary)]
struct CommonInput {
    strings: Vec<String>,
    k: u8,
}

fuzz_target!(|input: CommonInput| {
    // Keep the oracle tractable
    let strings: Vec<String> = input
        .strings
        .into_iter()
        .take(6)
        .map(|s| s.chars().take(8).collect())
        .collect();
    let k = usize::from(input.k % 8);

    match find_maximal_k_common_substrings(&strings, k) {
        Ok(found) => {
            assert!(strings.len() >= 2 && k >= 2);
            assert_eq!(found, oracle_k_common(&strings, k));
        }
        Err(e) => {
            assert!(e.is_invalid_input(), "unexpected error: {}", e);
            assert!(strings.len() < 2 || k < 2);
        }
    }
});
