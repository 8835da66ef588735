// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scores a query against documents of a fixed corpus.
//!
//! The scorer borrows the tokenized documents and owns the statistics built
//! from them. Term frequencies are counted per call into a local map, so
//! `score` takes `&self` and concurrent calls never touch shared mutable
//! state.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{idf, term_contribution, ScoreParams};
use super::corpus::CorpusStats;
use crate::error::Result;
use crate::utils::tokenize;

/// BM25+ scorer over one snapshot of tokenized documents.
#[derive(Debug, Clone)]
pub struct RelevanceScorer<'a, T> {
    documents: &'a [Vec<T>],
    stats: CorpusStats,
    params: ScoreParams,
}

impl<'a, T> RelevanceScorer<'a, T>
where
    T: AsRef<str> + Sync,
{
    /// Build corpus statistics for `documents` and fix the parameters for the
    /// scorer's lifetime. Fails on an empty corpus.
    pub fn new(documents: &'a [Vec<T>], params: ScoreParams) -> Result<Self> {
        let stats = CorpusStats::build::<_, T>(documents)?;
        Ok(Self {
            documents,
            stats,
            params,
        })
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Inverse document frequency of `term` in this corpus.
    pub fn idf(&self, term: &str) -> f64 {
        idf(
            self.stats.document_count(),
            self.stats.document_frequency(term),
        )
    }

    /// Relevance of `document` to `query`. Higher is more relevant.
    ///
    /// The query is split on whitespace and not normalized here. Every query
    /// token counts once per occurrence, so repeating a term in the query
    /// scales its contribution linearly. A query with no matching tokens
    /// (including the empty query) scores exactly 0.
    ///
    /// # Panics
    ///
    /// Panics if `document` is not an index into the scored documents.
    pub fn score(&self, query: &str, document: usize) -> f64 {
        let tokens = &self.documents[document];
        let frequencies = term_frequencies(tokens);
        let document_length = tokens.len();
        let avgdl = self.stats.average_document_length();

        let score = tokenize(query)
            .into_iter()
            .map(|term| {
                let frequency = frequencies.get(term).copied().unwrap_or(0);
                if frequency == 0 {
                    return 0.0;
                }
                term_contribution(
                    self.idf(term),
                    frequency,
                    document_length,
                    avgdl,
                    &self.params,
                )
            })
            .sum();

        tracing::trace!(document, score, "scored document");
        score
    }

    /// Scores of `query` against every document, in document order.
    #[cfg(feature = "parallel")]
    pub fn score_all(&self, query: &str) -> Vec<f64> {
        (0..self.documents.len())
            .into_par_iter()
            .map(|document| self.score(query, document))
            .collect()
    }

    /// Scores of `query` against every document, in document order.
    #[cfg(not(feature = "parallel"))]
    pub fn score_all(&self, query: &str) -> Vec<f64> {
        (0..self.documents.len())
            .map(|document| self.score(query, document))
            .collect()
    }
}

fn term_frequencies<T: AsRef<str>>(tokens: &[T]) -> HashMap<&str, usize> {
    let mut frequencies = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.as_ref()).or_insert(0) += 1;
    }
    frequencies
}
