// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! `corpus` counts, `scorer` applies the BM25+ formula from `core`, and
//! `ranking` keeps the best few. Statistics are built once per session and
//! only read afterwards.

mod core;
mod corpus;
pub mod ranking;
mod scorer;

pub use self::core::*;
pub use corpus::CorpusStats;
pub use ranking::{rank_documents, select_top3, select_top_k, Ranking, Top3};
pub use scorer::RelevanceScorer;
