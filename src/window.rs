//! Sliding window over suffix-array ranks for k-common substrings.
//!
//! # Algorithm Overview
//!
//! ```text
//! "abcdefg" "bcdefgh" "cdefghi", k = 2
//!
//! rank  color  suffix        lcp
//!  3      0    abcdefg$0      0
//!  4      0    bcdefg$0       0   ┐ window [4, 5]: colors {0, 1}
//!  5      1    bcdefgh$1      6   ┘ min lcp inside = 6 -> "bcdefg"
//!  6      0    cdefg$0        0
//!  7      1    cdefgh$1       5   ┐ window [7, 8]: colors {1, 2}
//!  8      2    cdefghi$2      6   ┘ min lcp inside = 6 -> "cdefgh"
//! ```
//!
//! Two pointers `lo <= hi` walk the ranks after the pure sentinel suffixes. The window
//! grows (`hi += 1`) until it holds suffixes from at least `k` different strings, then
//! shrinks (`lo += 1`). Every window that reaches `k` colors is scored by the minimum LCP
//! strictly inside it, which is the prefix shared by every suffix in the window. The
//! longest such prefixes, decoded back to characters, are the answer.
//!
//! For each `lo` this finds the smallest `hi` that makes the window k-good, and a larger
//! `hi` could only lower the minimum, so no better window anchored at `lo` is skipped.
//!
//! Color membership is a per-color count plus a running number of nonzero counts, so each
//! pointer move is O(1) instead of a fresh set per window.

use std::collections::BTreeSet;

use tracing::trace;

use crate::error::Result;
use crate::range_min::RangeMin;
use crate::types::{CommonSubstrings, LcpArray, SuffixArray, Text};

/// Color multiset of the suffixes between `lo` and `hi`.
#[derive(Debug)]
struct ColorWindow {
    counts: Vec<usize>,
    distinct: usize,
}

impl ColorWindow {
    fn new(num_colors: usize) -> Self {
        Self {
            counts: vec![0; num_colors],
            distinct: 0,
        }
    }

    fn insert(&mut self, color: usize) {
        self.counts[color] += 1;
        if self.counts[color] == 1 {
            self.distinct += 1;
        }
    }

    fn remove(&mut self, color: usize) {
        self.counts[color] -= 1;
        if self.counts[color] == 0 {
            self.distinct -= 1;
        }
    }

    fn distinct(&self) -> usize {
        self.distinct
    }
}

/// Start ranks of the best-scoring windows seen so far.
///
/// Only ranks are kept during the scan; decoding waits until the scan ends so each
/// reported substring is materialized once, whatever the number of ties on the way.
#[derive(Debug, Default)]
struct BestWindows {
    length: usize,
    starts: Vec<usize>,
}

impl BestWindows {
    /// Record window `lo` scoring `length`. A tie whose prefix equals the last kept start's
    /// (minimum LCP between the two ranks reaches `length`) adds nothing new and is skipped.
    fn offer(&mut self, lo: usize, length: usize, range_min: &RangeMin) -> Result<()> {
        if length == 0 || length < self.length {
            return Ok(());
        }
        if length > self.length {
            self.length = length;
            self.starts.clear();
        } else if let Some(&last) = self.starts.last() {
            if last == lo || range_min.query(last + 1, lo + 1)? >= length {
                return Ok(());
            }
        }
        self.starts.push(lo);
        Ok(())
    }

    fn decode(self, text: &Text, sa: &SuffixArray) -> Result<CommonSubstrings> {
        let substrings = self
            .starts
            .iter()
            .map(|&rank| text.decode(sa[rank], self.length))
            .collect::<Result<BTreeSet<String>>>()?;
        Ok(CommonSubstrings {
            length: self.length,
            substrings,
        })
    }
}

/// Find the longest substrings shared by at least `k` of the strings in `text`.
///
/// `sa` and `lcp` must belong to `text`. Arguments are not re-validated here; use
/// `find_maximal_k_common_substrings` for a checked entry point.
pub fn scan_common_substrings(
    text: &Text,
    sa: &SuffixArray,
    lcp: &LcpArray,
    k: usize,
) -> Result<CommonSubstrings> {
    let n = text.len();
    let first = text.num_sentinels();

    // Fewer than two real suffixes: nothing can be shared
    if n < first + 2 {
        return Ok(CommonSubstrings::default());
    }

    let range_min = RangeMin::build(lcp);
    let best = best_windows(text, sa, &range_min, k)?;
    trace!(
        n,
        k,
        length = best.length,
        windows = best.starts.len(),
        "window scan finished"
    );
    best.decode(text, sa)
}

fn best_windows(
    text: &Text,
    sa: &SuffixArray,
    range_min: &RangeMin,
    k: usize,
) -> Result<BestWindows> {
    let n = text.len();
    let first = text.num_sentinels();
    let color = |rank: usize| text.color_at(sa[rank]);
    let mut window = ColorWindow::new(first);
    let mut best = BestWindows::default();
    let (mut lo, mut hi) = (first, first);
    window.insert(color(lo));

    loop {
        if hi == n - 1 || window.distinct() >= k {
            window.remove(color(lo));
            lo += 1;
        } else {
            hi += 1;
            window.insert(color(hi));
        }

        if lo == n - 1 {
            break;
        }
        if lo == hi || window.distinct() < k {
            continue;
        }

        let length = range_min.query(lo + 1, hi + 1)?;
        best.offer(lo, length, range_min)?;
    }

    Ok(best)
}
