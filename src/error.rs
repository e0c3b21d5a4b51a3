// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the query pipeline.
//!
//! Two kinds of failure exist and they mean very different things:
//!
//! | Variant                      | Whose fault | Example                                   |
//! |------------------------------|-------------|-------------------------------------------|
//! | `InvalidInput`               | Caller      | `k < 2`, one string for a k-common query  |
//! | `InternalInvariantViolation` | This crate  | Suffix array that is not a permutation    |
//!
//! Input is validated once at the entry of each public operation, before any index is
//! built. An invariant violation aborts only the query that hit it; nothing is shared
//! between queries, so other queries are unaffected.

/// Errors returned by the public operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller supplied arguments the operation cannot accept.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A construction stage produced a structure that breaks its own invariant.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Error::InternalInvariantViolation(message.into())
    }

    /// True for errors caused by the caller rather than by a construction defect.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
