// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking the best few scores without sorting everything.
//!
//! One pass, a handful of slots, strict `>` comparisons. The strictness is the
//! observable part: an equal score never displaces a slot already held, so
//! among ties the earliest index wins and the order is stable.
//!
//! ```text
//! scores: [3.2, 5.5, 1.1, 7.8, 4.6, 6.3]
//!
//!   i=0 3.2  → [0, -, -]
//!   i=1 5.5  → [1, 0, -]
//!   i=2 1.1  → [1, 0, 2]
//!   i=3 7.8  → [3, 1, 0]
//!   i=4 4.6  → [3, 1, 4]
//!   i=5 6.3  → [3, 5, 1]
//! ```

use super::core::ScoreParams;
use super::scorer::RelevanceScorer;
use crate::error::Result;
use crate::utils::tokenize_corpus;

/// Three ranked slots, best first. `None` marks a slot nothing filled.
pub type Top3 = [Option<usize>; 3];

/// Indices of the three highest scores, best first, in a single pass.
///
/// Fewer than three scores leave trailing slots `None`. NaN never wins a slot
/// since every comparison against it is false.
///
/// ```
/// use fragrank::select_top3;
///
/// assert_eq!(select_top3(&[9.0, 1.0]), [Some(0), Some(1), None]);
/// ```
pub fn select_top3(scores: &[f64]) -> Top3 {
    let mut indices: Top3 = [None; 3];
    let mut values = [f64::NEG_INFINITY; 3];

    for (i, &score) in scores.iter().enumerate() {
        if score > values[0] {
            values[2] = values[1];
            indices[2] = indices[1];
            values[1] = values[0];
            indices[1] = indices[0];
            values[0] = score;
            indices[0] = Some(i);
        } else if score > values[1] {
            values[2] = values[1];
            indices[2] = indices[1];
            values[1] = score;
            indices[1] = Some(i);
        } else if score > values[2] {
            values[2] = score;
            indices[2] = Some(i);
        }
    }
    indices
}

/// Indices of the `k` highest scores, best first, in a single pass.
///
/// Same rules as [`select_top3`], generalized to a sorted array of `k` slots:
/// a score is inserted above the first slot it strictly beats and the lowest
/// slot falls off. The result always has exactly `k` entries.
pub fn select_top_k(scores: &[f64], k: usize) -> Vec<Option<usize>> {
    let mut slots: Vec<(f64, Option<usize>)> = vec![(f64::NEG_INFINITY, None); k];

    for (i, &score) in scores.iter().enumerate() {
        if let Some(position) = slots.iter().position(|&(value, _)| score > value) {
            slots.pop();
            slots.insert(position, (score, Some(i)));
        }
    }
    slots.into_iter().map(|(_, index)| index).collect()
}

/// Every candidate's score plus the best three.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub top: Top3,
}

impl Ranking {
    /// Present slots in rank order, paired with their scores. A slot pointing
    /// past `scores` is skipped.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.top
            .iter()
            .flatten()
            .filter_map(move |&index| self.scores.get(index).map(|&score| (index, score)))
    }
}

/// Re-rank candidate texts against `query` with BM25+.
///
/// Texts are split on whitespace as given; normalize query and texts first.
/// An empty candidate list is an [`crate::Error::EmptyCorpus`] error.
pub fn rank_documents<S: AsRef<str>>(
    query: &str,
    texts: &[S],
    params: ScoreParams,
) -> Result<Ranking> {
    let documents = tokenize_corpus(texts);
    let scorer = RelevanceScorer::new(&documents, params)?;
    let scores = scorer.score_all(query);
    let top = select_top3(&scores);

    tracing::debug!(candidates = scores.len(), ?top, "ranked candidates");
    Ok(Ranking { scores, top })
}
