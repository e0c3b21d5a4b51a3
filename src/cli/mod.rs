// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lcpkit command-line interface.
//!
//! Two subcommands, one per query: `repeats` counts repeated substrings for each line of
//! a judge-style input, and `common` finds the longest substrings shared by enough strings
//! in each test case. Input comes from a file or stdin; results go to stdout as plain text
//! or JSON, and logs go to stderr.

pub mod display;
pub mod input;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "lcpkit",
    about = "Repeated and k-common substring queries over suffix arrays",
    version
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error); overrides --verbose/--quiet
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count distinct repeated substrings for each input string
    ///
    /// Input: a line with the number of strings T, then T lines with one string each.
    /// An empty line counts 0.
    Repeats {
        /// Input file (defaults to stdin; `-` also means stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Find the longest substrings shared by at least k strings of each test case
    ///
    /// Input: blocks of a count line n followed by n strings, ended by a count of 0.
    Common {
        /// Input file (defaults to stdin; `-` also means stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Minimum number of strings a substring must occur in
        ///
        /// If not specified, uses more than half of each test case's strings.
        #[arg(short)]
        k: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Judge format: counts one per line, substrings one per line with `?` for none
    Text,
    /// One JSON object per query
    Json,
}
