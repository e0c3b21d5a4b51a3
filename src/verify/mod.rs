// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime checks on constructed structures.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked invariants** (`check_permutation`) that run on every query and turn a
//!    construction defect into `InternalInvariantViolation` instead of a wrong answer
//!    or an out-of-bounds panic further down the pipeline. They are O(n).
//!
//! 2. **Runtime contracts** (`contracts`) that panic in debug builds when a builder's
//!    output disagrees with brute force. Zero-cost in release, but catch algorithmic
//!    errors when tests run.

pub mod contracts;

use crate::error::{Error, Result};
use crate::types::SuffixArray;

/// Check that `sa` is a permutation of `[0, n)` for a text of length `n`.
pub fn check_permutation(sa: &SuffixArray, n: usize) -> Result<()> {
    if sa.len() != n {
        return Err(Error::invariant(format!(
            "suffix array has {} entries for a text of length {}",
            sa.len(),
            n
        )));
    }

    let mut seen = vec![false; n];
    for (rank, &position) in sa.iter().enumerate() {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(Error::invariant(format!(
                    "position {} appears twice in the suffix array (rank {})",
                    position, rank
                )))
            }
            None => {
                return Err(Error::invariant(format!(
                    "position {} at rank {} is outside text of length {}",
                    position, rank, n
                )))
            }
        }
    }
    Ok(())
}
