// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text construction: strings in, one tagged symbol sequence out.
//!
//! Each string is followed by its own sentinel, and every position (sentinel included)
//! remembers which string it came from. Characters are shifted up by
//! `num_sentinels - min_code` so the smallest real character lands right above the
//! largest sentinel.
//!
//! Character codes are Unicode scalar values. No normalization happens here: two
//! strings are equal exactly when their `char` sequences are.

use crate::error::{Error, Result};
use crate::types::{Symbol, Text};

/// Build a colored text over one or more strings.
///
/// Empty strings are allowed; they contribute a sentinel and nothing else.
pub fn build_text<S: AsRef<str>>(strings: &[S]) -> Result<Text> {
    if strings.is_empty() {
        return Err(Error::invalid_input("no strings supplied"));
    }

    let num_sentinels = strings.len();
    let sentinels = u32::try_from(num_sentinels)
        .map_err(|_| Error::invalid_input(format!("too many strings: {}", num_sentinels)))?;

    let min_code = strings
        .iter()
        .flat_map(|s| s.as_ref().chars())
        .map(u32::from)
        .min()
        .unwrap_or(0);

    let capacity = strings.iter().map(|s| s.as_ref().chars().count()).sum::<usize>() + num_sentinels;
    let mut symbols: Vec<Symbol> = Vec::with_capacity(capacity);
    let mut colors: Vec<usize> = Vec::with_capacity(capacity);

    for (color, s) in strings.iter().enumerate() {
        for c in s.as_ref().chars() {
            symbols.push(shift(c, min_code, sentinels)?);
            colors.push(color);
        }
        symbols.push(color as Symbol);
        colors.push(color);
    }

    Ok(Text::from_parts(symbols, colors, num_sentinels, min_code))
}

/// Build a colored text for a k-common substring query.
///
/// Needs at least two strings and `k >= 2`; both are checked before anything is built.
pub fn build_colored_text<S: AsRef<str>>(strings: &[S], k: usize) -> Result<Text> {
    validate_common_query(strings.len(), k)?;
    build_text(strings)
}

/// Build a sentinel-free text for a single non-empty string.
///
/// The repeat count only looks at one string, so no terminator or color is needed; every
/// color entry is 0.
pub fn build_plain_text(s: &str) -> Result<Text> {
    if s.is_empty() {
        return Err(Error::invalid_input("empty string"));
    }

    let min_code = s.chars().map(u32::from).min().unwrap_or(0);
    let symbols = s
        .chars()
        .map(|c| shift(c, min_code, 0))
        .collect::<Result<Vec<_>>>()?;
    let colors = vec![0; symbols.len()];

    Ok(Text::from_parts(symbols, colors, 0, min_code))
}

pub(crate) fn validate_common_query(num_strings: usize, k: usize) -> Result<()> {
    if num_strings < 2 {
        return Err(Error::invalid_input(format!(
            "need at least 2 strings, got {}",
            num_strings
        )));
    }
    if k < 2 {
        return Err(Error::invalid_input(format!(
            "k must be at least 2, got {}",
            k
        )));
    }
    Ok(())
}

#[inline]
fn shift(c: char, min_code: u32, sentinels: u32) -> Result<Symbol> {
    (u32::from(c) - min_code)
        .checked_add(sentinels)
        .ok_or_else(|| Error::invalid_input(format!("character {:?} out of symbol range", c)))
}
