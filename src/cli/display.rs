// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rendering for the lcpkit CLI.
//!
//! Text output follows the judge formats the input came from: one count per line for
//! `repeats`; for `common`, the substrings of each case one per line (sorted), `?` when
//! there are none, and a blank line after every case. JSON output writes one object per
//! query on its own line.

use std::io::Write;

use anyhow::Result;
use lcpkit::CommonSubstrings;
use serde::Serialize;

use super::OutputFormat;

/// Placeholder printed when a case has no shared substring.
pub const NO_ANSWER: &str = "?";

#[derive(Serialize)]
struct RepeatReport {
    count: u64,
}

/// Write the repeat count of one string.
pub fn write_repeat_count<W: Write>(out: &mut W, count: u64, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", count)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &RepeatReport { count })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the shared substrings of one test case.
pub fn write_common_substrings<W: Write>(
    out: &mut W,
    found: &CommonSubstrings,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if found.is_empty() {
                writeln!(out, "{}", NO_ANSWER)?;
            }
            for substring in found {
                writeln!(out, "{}", substring)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, found)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
