// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Retrieve, re-rank, generate.
//!
//! The I/O-bound steps (fetching articles, embedding and nearest-neighbor
//! search, the completion call) sit behind traits. This module only wires
//! them around the core:
//!
//! ```text
//! query ──normalize──▶ DocumentSource::fetch (lang)
//!                          │ raw texts
//!                          ▼
//!              normalize + chunk_text ──▶ VectorIndex::add
//!                                              │
//!                      VectorIndex::search ◀───┘
//!                          │ candidates
//!                          ▼
//!                   rank_documents (BM25+) ──▶ top 3
//!                          │
//!                     build_prompt (lang) ──▶ Generator::complete
//! ```

use std::fmt::Write as _;
use thiserror::Error;

use crate::chunk::chunk_text;
use crate::config::Config;
use crate::scoring::rank_documents;
use crate::utils::normalize;

/// Error type collaborators report through.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies raw documents for a query (an article search API, a directory...).
pub trait DocumentSource {
    /// Up to `limit` documents for `query`, written in `lang`.
    fn fetch(&self, query: &str, lang: &str, limit: usize) -> Result<Vec<String>, BoxError>;
}

/// Embeds chunks and finds the nearest ones to a query.
pub trait VectorIndex {
    fn add(&mut self, chunk: String) -> Result<(), BoxError>;

    /// Up to `k` stored chunks, nearest first.
    fn search(&self, query: &str, k: usize) -> Result<Vec<String>, BoxError>;
}

/// Turns a prompt into an answer (a remote completion endpoint, usually).
pub trait Generator {
    fn complete(&self, prompt: &str) -> Result<String, BoxError>;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} failed: {source}")]
    Collaborator {
        stage: &'static str,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Core(#[from] crate::Error),
}

fn stage(stage: &'static str) -> impl FnOnce(BoxError) -> PipelineError {
    move |source| PipelineError::Collaborator { stage, source }
}

/// Numbered-context prompt handed to the generator, asking for an answer
/// in `lang`.
///
/// ```
/// use fragrank::pipeline::build_prompt;
///
/// let prompt = build_prompt("rust", "en", &["first", "second"]);
/// assert!(prompt.contains("using the language \"en\""));
/// assert!(prompt.ends_with("1. first\n2. second\n"));
/// ```
pub fn build_prompt<S: AsRef<str>>(query: &str, lang: &str, fragments: &[S]) -> String {
    let mut prompt = format!(
        "The context is given by the numbered text fragments below. \
         Based on this context, tell me about {:?}, using the language {:?}. Context:\n",
        query, lang
    );
    for (i, fragment) in fragments.iter().enumerate() {
        // Writing to a String can't fail
        let _ = writeln!(prompt, "{}. {}", i + 1, fragment.as_ref());
    }
    prompt
}

/// Everything an answer was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Re-ranked context fragments, best first.
    pub context: Vec<String>,
    pub prompt: String,
    pub text: String,
}

/// How many raw documents to request from the source.
pub const DEFAULT_SOURCE_LIMIT: usize = 8;

pub struct Pipeline<S, I, G> {
    source: S,
    index: I,
    generator: G,
    config: Config,
    source_limit: usize,
}

impl<S, I, G> Pipeline<S, I, G>
where
    S: DocumentSource,
    I: VectorIndex,
    G: Generator,
{
    pub fn new(source: S, index: I, generator: G, config: Config) -> Self {
        Self {
            source,
            index,
            generator,
            config,
            source_limit: DEFAULT_SOURCE_LIMIT,
        }
    }

    pub fn with_source_limit(mut self, limit: usize) -> Self {
        self.source_limit = limit;
        self
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Normalize and chunk each raw document into the vector index. Returns
    /// the number of chunks added.
    pub fn ingest<T: AsRef<str>>(&mut self, documents: &[T]) -> Result<usize, PipelineError> {
        let window = self.config.chunking;
        let mut added = 0;
        for document in documents {
            let text = normalize(document.as_ref());
            let chunks = chunk_text(&text, window.max_length, window.overlap)?;
            for chunk in chunks {
                self.index.add(chunk).map_err(stage("index"))?;
                added += 1;
            }
        }
        tracing::debug!(documents = documents.len(), chunks = added, "ingested documents");
        Ok(added)
    }

    /// Nearest chunks for `query`, re-ranked with BM25+; at most three, best
    /// first. The query is normalized first, like the indexed chunks. No
    /// candidates means no context rather than an error.
    pub fn retrieve(&self, query: &str) -> Result<Vec<String>, PipelineError> {
        let query = normalize(query);
        let candidates = self
            .index
            .search(&query, self.config.candidates)
            .map_err(stage("index"))?;
        if candidates.is_empty() {
            tracing::warn!(query = %query, "vector index returned no candidates");
            return Ok(Vec::new());
        }

        let ranking = rank_documents(&query, &candidates, self.config.scoring)?;
        Ok(ranking
            .ranked()
            .map(|(index, _)| candidates[index].clone())
            .collect())
    }

    /// Run the whole flow for a raw query.
    ///
    /// A failing document source is logged and the answer is generated without
    /// fetched context, as long as the index can still produce candidates.
    pub fn answer(&mut self, query: &str) -> Result<Answer, PipelineError> {
        let query = normalize(query);

        match self.source.fetch(&query, &self.config.lang, self.source_limit) {
            Ok(documents) => {
                self.ingest(&documents)?;
            }
            Err(err) => {
                tracing::warn!(error = %err, "document source failed, continuing without it");
            }
        }

        let context = self.retrieve(&query)?;
        let prompt = build_prompt(&query, &self.config.lang, &context);
        let text = self.generator.complete(&prompt).map_err(stage("generate"))?;

        Ok(Answer {
            context,
            prompt,
            text,
        })
    }
}
