//! Repeated and k-common substring queries over suffix arrays.
//!
//! Two questions, one machinery:
//!
//! - How many distinct substrings of a string occur more than once?
//! - Given `n` strings and a threshold `k`, which are the longest substrings that occur
//!   in at least `k` of them?
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────────┐   ┌──────────┐   ┌──────────────┐   ┌─────────────┐
//! │  text.rs   │──▶│ suffix_array.rs│──▶│  lcp.rs  │──▶│ range_min.rs │──▶│  window.rs  │
//! │ (symbols,  │   │ (prefix        │   │ (Kasai)  │   │ (segment     │   │ (two-pointer│
//! │  colors)   │   │  doubling)     │   │          │   │  tree)       │   │  k-common)  │
//! └────────────┘   └────────────────┘   └────┬─────┘   └──────────────┘   └─────────────┘
//!                                            │
//!                                            ▼
//!                                     ┌─────────────┐
//!                                     │ repeats.rs  │
//!                                     └─────────────┘
//! ```
//!
//! Every stage returns a new immutable value; nothing downstream mutates what an earlier
//! stage built. `query` wires the stages together behind validated entry points, and
//! `verify` turns construction defects into errors instead of wrong answers.
//!
//! # Usage
//!
//! ```
//! use lcpkit::{count_repeated_substrings, find_maximal_k_common_substrings};
//!
//! assert_eq!(count_repeated_substrings("aabaab").unwrap(), 5);
//!
//! let found = find_maximal_k_common_substrings(&["xxx", "yyy", "zzz"], 2).unwrap();
//! assert!(found.is_empty());
//! ```

// Module declarations
mod error;
mod lcp;
mod query;
mod range_min;
mod repeats;
mod suffix_array;
pub mod testing;
mod text;
mod types;
pub mod verify;
mod window;

// Re-exports for public API
pub use error::{Error, Result};
pub use lcp::build_lcp_array;
pub use query::{
    count_repeated_substrings, count_repeated_substrings_batch, find_majority_common_substrings,
    find_majority_common_substrings_batch, find_maximal_k_common_substrings,
    find_maximal_k_common_substrings_batch, majority,
};
pub use range_min::RangeMin;
pub use repeats::count_repeats;
pub use suffix_array::build_suffix_array;
pub use text::{build_colored_text, build_plain_text, build_text};
pub use types::{CommonSubstrings, LcpArray, SuffixArray, Symbol, Text};
pub use window::scan_common_substrings;
