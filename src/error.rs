// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for parameters the core refuses to work with.
//!
//! Only invalid parameters are errors. Empty results (a query that matches
//! nothing, a top-k pass over fewer than k scores) are ordinary values and
//! never show up here.

use thiserror::Error;

/// Invalid-parameter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The chunk stride `max_length - overlap` would be zero or negative,
    /// so chunking would never advance.
    #[error("chunk overlap {overlap} must be smaller than max length {max_length}")]
    InvalidChunkWindow { max_length: usize, overlap: usize },

    /// Corpus statistics were requested over zero documents, which leaves the
    /// average document length undefined.
    #[error("corpus statistics need at least one document")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, Error>;
