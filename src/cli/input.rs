// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Judge-style input parsing.
//!
//! Both formats are line-oriented. Count lines may carry surrounding whitespace; string
//! lines are taken verbatim apart from a trailing `\r`, since spaces can be part of a
//! string.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{bail, Context, Result};

/// Open `path` for reading, or stdin when `path` is `None` or `-`.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Line reader that tracks line numbers for error messages.
struct Lines<R> {
    inner: io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        match self.inner.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                let mut line =
                    line.with_context(|| format!("Failed to read line {}", self.line_no))?;
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
        }
    }

    /// Next non-blank line parsed as a count, or `None` at end of input.
    fn next_count(&mut self) -> Result<Option<usize>> {
        while let Some(line) = self.next_line()? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let count = trimmed.parse::<usize>().with_context(|| {
                format!("Line {}: expected a count, found {:?}", self.line_no, trimmed)
            })?;
            return Ok(Some(count));
        }
        Ok(None)
    }

    fn take_strings(&mut self, count: usize) -> Result<Vec<String>> {
        let mut strings = Vec::with_capacity(count);
        for i in 0..count {
            match self.next_line()? {
                Some(line) => strings.push(line),
                None => bail!(
                    "Unexpected end of input after line {}: expected {} strings, found {}",
                    self.line_no,
                    count,
                    i
                ),
            }
        }
        Ok(strings)
    }
}

/// Read the repeated-substrings format: a count `T`, then `T` strings.
pub fn read_repeat_cases<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Lines::new(reader);
    match lines.next_count()? {
        Some(count) => lines.take_strings(count),
        None => Ok(Vec::new()),
    }
}

/// Read the common-substrings format: blocks of a count `n` and `n` strings, ended by a
/// count of 0 or end of input.
pub fn read_common_cases<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut lines = Lines::new(reader);
    let mut cases = Vec::new();
    while let Some(count) = lines.next_count()? {
        if count == 0 {
            break;
        }
        cases.push(lines.take_strings(count)?);
    }
    Ok(cases)
}
