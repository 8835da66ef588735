// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite and deterministic for any corpus and query. A
//! document sharing no token with the query scores exactly zero.

#![no_main]

use arbitrary::Arbitrary;
use fragrank::{normalize, tokenize_corpus, RelevanceScorer, ScoreParams};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    documents: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    let texts: Vec<String> = input
        .documents
        .iter()
        .take(64)
        .map(|d| normalize(d))
        .collect();
    let documents = tokenize_corpus(&texts);
    let query = normalize(&input.query);

    let scorer = match RelevanceScorer::new(&documents, ScoreParams::default()) {
        Ok(scorer) => scorer,
        Err(_) => {
            assert!(documents.is_empty());
            return;
        }
    };

    // INVARIANT 1: scoring is deterministic
    let first = scorer.score_all(&query);
    let second = scorer.score_all(&query);
    assert_eq!(first, second, "same query produced different scores");

    for (index, score) in first.iter().enumerate() {
        // INVARIANT 2: no NaN or infinity
        assert!(score.is_finite(), "document {index} scored {score}");

        // INVARIANT 3: no shared token means zero
        let shares_token = query
            .split_whitespace()
            .any(|term| documents[index].iter().any(|token| token == term));
        if !shares_token {
            assert_eq!(*score, 0.0);
        }

        // INVARIANT 4: the empty query scores zero
        assert_eq!(scorer.score("", index), 0.0);
    }
});
