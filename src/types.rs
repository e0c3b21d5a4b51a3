// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows between pipeline stages.
//!
//! Each stage consumes the previous stage's output and returns a new immutable value.
//! Nothing here is mutated after construction, so a query can hand these around freely
//! and two queries never see each other's state.
//!
//! | Type               | Built by           | Invariant                                         |
//! |--------------------|--------------------|---------------------------------------------------|
//! | `Text`             | `text`             | Sentinels in `[0, num_sentinels)`, characters above |
//! | `SuffixArray`      | `suffix_array`     | Permutation of `[0, n)` in suffix order           |
//! | `LcpArray`         | `lcp`              | `lcp[0] = 0`, `lcp[i]` = prefix shared with rank `i-1` |
//! | `CommonSubstrings` | `window`           | Every entry has length `length`                   |
//!
//! # Symbol space
//!
//! ```text
//! strings:  "ab"        "b"
//! symbols:  [a+s b+s 0] [b+s 1]      s = num_sentinels - min_code
//! colors:   [ 0   0  0] [ 1  1]
//! ```
//!
//! Sentinels are unique per string and sort below every character, so no suffix can
//! match across a string boundary.

use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Deref;

use crate::error::{Error, Result};

/// One position of the indexed text.
///
/// Values below the sentinel count are terminators; everything else is a shifted
/// character code.
pub type Symbol = u32;

// =============================================================================
// TEXT
// =============================================================================

/// Concatenated symbol sequence with its position-to-string color map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    symbols: Vec<Symbol>,
    colors: Vec<usize>,
    num_sentinels: usize,
    min_code: u32,
}

impl Text {
    pub(crate) fn from_parts(
        symbols: Vec<Symbol>,
        colors: Vec<usize>,
        num_sentinels: usize,
        min_code: u32,
    ) -> Self {
        debug_assert_eq!(symbols.len(), colors.len());
        Self {
            symbols,
            colors,
            num_sentinels,
            min_code,
        }
    }

    /// The symbol sequence.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Origin-string index for every position, trailing sentinels included.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Origin-string index of one position.
    pub fn color_at(&self, position: usize) -> usize {
        self.colors[position]
    }

    /// Number of sentinel symbols, which equals the number of source strings.
    /// Zero for a plain single-string text.
    pub fn num_sentinels(&self) -> usize {
        self.num_sentinels
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Reverse the alphabet shift for `len` symbols starting at `start`.
    ///
    /// Fails if the range leaves the text or touches a sentinel: a substring shared by
    /// two different suffixes can never contain one, so either case is a defect upstream.
    pub fn decode(&self, start: usize, len: usize) -> Result<String> {
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.symbols.len())
            .ok_or_else(|| {
                Error::invariant(format!(
                    "substring {}..{} leaves text of length {}",
                    start,
                    start.saturating_add(len),
                    self.symbols.len()
                ))
            })?;

        self.symbols[start..end]
            .iter()
            .map(|&symbol| self.decode_symbol(symbol))
            .collect()
    }

    fn decode_symbol(&self, symbol: Symbol) -> Result<char> {
        let sentinels = self.num_sentinels as u32;
        if symbol < sentinels {
            return Err(Error::invariant(format!(
                "sentinel {} inside a decoded substring",
                symbol
            )));
        }
        char::from_u32(symbol - sentinels + self.min_code).ok_or_else(|| {
            Error::invariant(format!("symbol {} does not map back to a character", symbol))
        })
    }
}

// =============================================================================
// SUFFIX ARRAY / LCP ARRAY
// =============================================================================

/// Text positions ordered by the lexicographic value of the suffix starting there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixArray(Vec<usize>);

impl SuffixArray {
    pub(crate) fn new(positions: Vec<usize>) -> Self {
        Self(positions)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Inverse permutation: `rank_of()[position]` is the rank of that suffix.
    ///
    /// Only meaningful for a valid permutation; see `verify::check_permutation`.
    pub fn rank_of(&self) -> Vec<usize> {
        let mut rank = vec![0; self.0.len()];
        for (r, &position) in self.0.iter().enumerate() {
            rank[position] = r;
        }
        rank
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for SuffixArray {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// Per-rank length of the prefix shared with the previous rank. `lcp[0]` is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LcpArray(Vec<usize>);

impl LcpArray {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for LcpArray {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Longest substrings occurring in at least `k` source strings.
///
/// Substrings are deduplicated and sorted. An empty set (with `length == 0`) means no
/// substring is shared by `k` strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommonSubstrings {
    pub length: usize,
    pub substrings: BTreeSet<String>,
}

impl CommonSubstrings {
    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.substrings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.substrings.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a CommonSubstrings {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.substrings.iter()
    }
}
