// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static range-minimum index over the LCP array.
//!
//! A bottom-up segment tree with `n` leaves stored at `tree[n..2n]` and internal node `i`
//! covering children `2i` and `2i + 1`. Slots start out empty (`None`), and combining an
//! empty slot with a value yields the value, so padding never needs a magic number that
//! "can't occur" in real data.
//!
//! ```text
//! values:        [0, 3, 1, 2]
//! tree:    [-, 0, 0, 1, 0, 3, 1, 2]
//!              └root  └──leaves──┘
//! ```

use crate::error::{Error, Result};

/// Minimum over half-open ranges of a fixed-length array.
#[derive(Debug, Clone)]
pub struct RangeMin {
    n: usize,
    tree: Vec<Option<usize>>,
}

/// Minimum where `None` is the identity.
#[inline]
fn combine(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl RangeMin {
    /// Build over `values` in O(n).
    pub fn build(values: &[usize]) -> Self {
        let n = values.len();
        let mut tree = vec![None; 2 * n];
        for (slot, &value) in tree[n..].iter_mut().zip(values) {
            *slot = Some(value);
        }
        for i in (1..n).rev() {
            tree[i] = combine(tree[2 * i], tree[2 * i + 1]);
        }
        Self { n, tree }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Combine `value` into leaf `index` and refresh its ancestors. O(log n).
    ///
    /// The leaf keeps the smaller of its current value and `value`.
    pub fn update(&mut self, index: usize, value: usize) -> Result<()> {
        if index >= self.n {
            return Err(Error::invariant(format!(
                "update at {} outside index of length {}",
                index, self.n
            )));
        }

        let mut i = index + self.n;
        self.tree[i] = combine(self.tree[i], Some(value));
        while i > 1 {
            i >>= 1;
            self.tree[i] = combine(self.tree[2 * i], self.tree[2 * i + 1]);
        }
        Ok(())
    }

    /// Minimum of `values[l..r]`. O(log n).
    ///
    /// Empty or out-of-bounds ranges are a caller defect and report
    /// `InternalInvariantViolation`, as does an empty combination over a non-empty range.
    pub fn query(&self, l: usize, r: usize) -> Result<usize> {
        if l >= r || r > self.n {
            return Err(Error::invariant(format!(
                "range {}..{} is empty or outside index of length {}",
                l, r, self.n
            )));
        }

        let mut result = None;
        let (mut lo, mut hi) = (l + self.n, r + self.n);
        while lo < hi {
            if lo & 1 == 1 {
                result = combine(result, self.tree[lo]);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                result = combine(result, self.tree[hi]);
            }
            lo >>= 1;
            hi >>= 1;
        }

        result.ok_or_else(|| Error::invariant(format!("no value in non-empty range {}..{}", l, r)))
    }
}
