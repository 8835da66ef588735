// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus statistics: document frequencies and lengths.
//!
//! Built once from a snapshot of tokenized documents and never mutated, so a
//! shared `&CorpusStats` can back any number of concurrent scoring calls.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Document-frequency table and length statistics for one scoring session.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStats {
    document_count: usize,
    document_frequency: HashMap<String, usize>,
    document_lengths: Vec<usize>,
    average_document_length: f64,
}

impl CorpusStats {
    /// One pass over all tokens.
    ///
    /// A token repeated inside a document counts once toward its document
    /// frequency, but every repetition counts toward the document's length.
    ///
    /// Zero documents is an error: the average length would be `0 / 0`.
    pub fn build<D, T>(documents: &[D]) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut document_lengths = Vec::with_capacity(documents.len());

        for document in documents {
            let tokens = document.as_ref();
            document_lengths.push(tokens.len());

            let distinct: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
            for token in distinct {
                *document_frequency.entry(token.to_owned()).or_insert(0) += 1;
            }
        }

        let total: usize = document_lengths.iter().sum();
        let average_document_length = total as f64 / documents.len() as f64;

        tracing::debug!(
            documents = documents.len(),
            vocabulary = document_frequency.len(),
            avgdl = average_document_length,
            "built corpus statistics"
        );

        Ok(Self {
            document_count: documents.len(),
            document_frequency,
            document_lengths,
            average_document_length,
        })
    }

    /// Number of documents (N).
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct documents containing `term`, 0 if none do.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Token count of document `index`, duplicates included.
    pub fn document_length(&self, index: usize) -> Option<usize> {
        self.document_lengths.get(index).copied()
    }

    pub fn document_lengths(&self) -> &[usize] {
        &self.document_lengths
    }

    /// Mean of [`Self::document_lengths`]. Always finite since the corpus is
    /// never empty. Zero when every document is empty.
    pub fn average_document_length(&self) -> f64 {
        self.average_document_length
    }

    /// Number of distinct tokens across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}
