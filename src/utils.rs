// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Everything downstream (chunking, corpus statistics, scoring) assumes text
//! went through [`normalize`] first. Scoring never normalizes on its own, so a
//! query and its candidates must be normalized the same way by the caller.

/// Normalize a string for ranking: lowercase and collapse whitespace.
///
/// - Leading and trailing whitespace is dropped
/// - Every run of Unicode whitespace (tabs, newlines, form feeds, NBSP, ...)
///   becomes one ASCII space
/// - Letters are lowercased with the Unicode mappings, so `ẞ` becomes `ß`
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use fragrank::normalize;
///
/// assert_eq!(normalize("   Hello    \n   World\t!"), "hello world !");
/// ```
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into tokens on whitespace. No stemming, no stop words.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Tokenize every text into owned tokens, one document per text.
pub fn tokenize_corpus<S: AsRef<str>>(texts: &[S]) -> Vec<Vec<String>> {
    texts
        .iter()
        .map(|text| {
            tokenize(text.as_ref())
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
        .collect()
}
