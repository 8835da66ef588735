// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25+ re-ranking and overlapping chunking for retrieval pipelines.
//!
//! Long documents are normalized and cut into overlapping windows before they
//! go into a vector index. When the index hands back candidates for a query,
//! they are re-ranked lexically with BM25+ and the best three are kept.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│   chunk.rs   │────▶ (vector index, external)
//! │ (normalize, │     │ (chunk_text) │                 │
//! │  tokenize)  │     └──────────────┘                 │ candidates
//! └─────────────┘                                      ▼
//!        │           ┌─────────────────────────────────────────────┐
//!        └──────────▶│                 scoring/                    │
//!                    │  corpus.rs ─▶ scorer.rs ─▶ ranking.rs       │
//!                    │ (CorpusStats) (RelevanceScorer) (top 3)     │
//!                    └─────────────────────────────────────────────┘
//!                                      │ ranked indices
//!                                      ▼
//!                          pipeline.rs (prompt, generator)
//! ```
//!
//! Everything in `utils`, `chunk` and `scoring` is synchronous, pure, and free
//! of I/O. Built statistics are immutable, so scoring many documents against
//! one corpus needs no locks (the `parallel` feature scores them with rayon).
//!
//! # Usage
//!
//! ```
//! use fragrank::{chunk_text, normalize, rank_documents, ScoreParams};
//!
//! let chunks = chunk_text(&normalize("Some   LONG article text"), 12, 4).unwrap();
//! assert_eq!(chunks[0], "some long ar");
//!
//! let candidates = [
//!     "python has a great ecosystem",
//!     "golang is great for concurrency",
//! ];
//! let ranking = rank_documents("golang", &candidates, ScoreParams::default()).unwrap();
//! assert_eq!(ranking.top[0], Some(1));
//! ```

mod chunk;
pub mod config;
mod error;
pub mod pipeline;
mod scoring;
mod utils;

pub use chunk::{chunk_ranges, chunk_text, ChunkWindow, DEFAULT_MAX_LENGTH, DEFAULT_OVERLAP};
pub use config::Config;
pub use error::{Error, Result};
pub use scoring::{
    idf, rank_documents, saturated_frequency, select_top3, select_top_k, term_contribution,
    CorpusStats, Ranking, RelevanceScorer, ScoreParams, Top3, DEFAULT_B, DEFAULT_DELTA,
    DEFAULT_K1,
};
pub use utils::{normalize, tokenize, tokenize_corpus};
