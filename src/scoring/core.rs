// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind BM25+ relevance.
//!
//! A query term that occurs `f` times in a document of length `dl` contributes
//!
//! ```text
//! idf(term) * ( f * (k1 + 1) / (f + k1 * (1 - b + b * dl / avgdl)) + delta )
//! idf(term) = ln( (N - df + 0.5) / (df + 0.5) + 1 )
//! ```
//!
//! and a term that doesn't occur contributes nothing. The saturation part is
//! bounded by `k1 + 1`: the tenth repetition of a term is worth far less than
//! the second.
//!
//! # IDF range
//!
//! The `+ 1` inside the logarithm keeps its argument above 1 whenever
//! `df <= N`, so IDF here is always positive. It is largest for a term no
//! document contains and smallest for a term every document contains. The
//! value is used as computed, never clamped or floored.

use serde::{Deserialize, Serialize};

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================
// Tuned for re-ranking short retrieved passages: weak length normalization,
// fast saturation, and a large lower bound for any matching term.

/// Default term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.9;

/// Default document-length normalization.
pub const DEFAULT_B: f64 = 0.3;

/// Default lower bound added to every matching term's saturation.
pub const DEFAULT_DELTA: f64 = 1.9;

/// BM25+ tuning knobs.
///
/// Nothing here is validated. Values outside the conventional ranges (`b`
/// outside `[0, 1]`, negative `k1`) change the shape of the ranking but are
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreParams {
    pub k1: f64,
    pub b: f64,
    pub delta: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            delta: DEFAULT_DELTA,
        }
    }
}

impl ScoreParams {
    pub fn new(k1: f64, b: f64, delta: f64) -> Self {
        Self { k1, b, delta }
    }
}

/// Inverse document frequency of a term found in `document_frequency` of
/// `document_count` documents.
///
/// Strictly decreasing in `document_frequency`: maximal for `df = 0`,
/// minimal (but still positive) for `df = N`.
pub fn idf(document_count: usize, document_frequency: usize) -> f64 {
    let n = document_count as f64;
    let df = document_frequency as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// Length-normalized, saturating term frequency.
///
/// Non-decreasing in `frequency` and bounded above by `k1 + 1` for
/// non-negative `k1` and a length factor `1 - b + b * dl / avgdl >= 0`.
pub fn saturated_frequency(
    frequency: f64,
    document_length: f64,
    average_document_length: f64,
    params: &ScoreParams,
) -> f64 {
    let length_norm = 1.0 - params.b + params.b * document_length / average_document_length;
    frequency * (params.k1 + 1.0) / (frequency + params.k1 * length_norm)
}

/// Contribution of one query term occurrence to a document's score.
///
/// Zero when the term doesn't occur in the document (`frequency == 0`), so
/// `delta` only rewards terms that actually matched.
pub fn term_contribution(
    idf: f64,
    frequency: usize,
    document_length: usize,
    average_document_length: f64,
    params: &ScoreParams,
) -> f64 {
    if frequency == 0 {
        return 0.0;
    }
    let saturated = saturated_frequency(
        frequency as f64,
        document_length as f64,
        average_document_length,
        params,
    );
    idf * (saturated + params.delta)
}
