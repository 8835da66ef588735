//! BM25+ scoring properties.
//!
//! - Empty queries score zero against anything
//! - More occurrences of a query term never lower its contribution, and each
//!   extra occurrence is worth no more than the previous one
//! - IDF is largest for unseen terms and smallest for terms in every document
//! - Document order doesn't change any document's score

use crate::common::{corpus_strategy, query_strategy, word_strategy};
use fragrank::{idf, term_contribution, CorpusStats, RelevanceScorer, ScoreParams};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = ScoreParams> {
    (0.1f64..3.0, 0.0f64..=1.0, 0.0f64..3.0).prop_map(|(k1, b, delta)| ScoreParams::new(k1, b, delta))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the empty query scores exactly zero.
    #[test]
    fn prop_empty_query_scores_zero(corpus in corpus_strategy(), params in params_strategy()) {
        let scorer = RelevanceScorer::new(&corpus, params).unwrap();
        for document in 0..corpus.len() {
            prop_assert_eq!(scorer.score("", document), 0.0);
        }
    }

    /// Property: scores are finite for any non-empty corpus and query.
    #[test]
    fn prop_scores_finite(corpus in corpus_strategy(), query in query_strategy(), params in params_strategy()) {
        let scorer = RelevanceScorer::new(&corpus, params).unwrap();
        for score in scorer.score_all(&query) {
            prop_assert!(score.is_finite(), "score {} is not finite", score);
        }
    }

    /// Property: contribution is non-decreasing in term frequency and saturates.
    #[test]
    fn prop_contribution_monotone_and_saturating(
        frequency in 1usize..60,
        document_length in 1usize..200,
        avgdl in 1.0f64..200.0,
        params in params_strategy(),
        n in 1usize..50,
        df_seed in 0usize..50,
    ) {
        let weight = idf(n, df_seed % (n + 1));
        let c0 = term_contribution(weight, frequency, document_length, avgdl, &params);
        let c1 = term_contribution(weight, frequency + 1, document_length, avgdl, &params);
        let c2 = term_contribution(weight, frequency + 2, document_length, avgdl, &params);

        prop_assert!(c1 >= c0, "contribution dropped: f={} {} -> {}", frequency, c0, c1);
        let tolerance = 1e-12 * c2.abs().max(1.0);
        prop_assert!(
            c2 - c1 <= c1 - c0 + tolerance,
            "gain grew: {} then {}",
            c1 - c0,
            c2 - c1
        );
        prop_assert!(c2 <= weight * (params.k1 + 1.0 + params.delta) + tolerance);
    }

    /// Property: with document length fixed, swapping filler for the query term
    /// never lowers the document's score.
    #[test]
    fn prop_more_matches_never_hurt(
        length in 2usize..20,
        frequency in 1usize..19,
        params in params_strategy(),
    ) {
        prop_assume!(frequency < length);

        let document = |f: usize| -> Vec<String> {
            let mut tokens = vec!["rust".to_string(); f];
            tokens.extend(std::iter::repeat("filler".to_string()).take(length - f));
            tokens
        };
        let others = vec![
            vec!["go".to_string(), "rust".to_string()],
            vec!["python".to_string(); 3],
        ];

        let mut lower = vec![document(frequency)];
        lower.extend(others.clone());
        let mut higher = vec![document(frequency + 1)];
        higher.extend(others);

        let low = RelevanceScorer::new(&lower, params).unwrap().score("rust", 0);
        let high = RelevanceScorer::new(&higher, params).unwrap().score("rust", 0);
        prop_assert!(high >= low, "{} occurrences scored {} < {}", frequency + 1, high, low);
    }

    /// Property: unseen terms get the maximum IDF, terms in every document the minimum.
    #[test]
    fn prop_idf_extremes(corpus in corpus_strategy(), term in word_strategy()) {
        let scorer = RelevanceScorer::new(&corpus, ScoreParams::default()).unwrap();
        let n = corpus.len();

        let unseen = scorer.idf("never-seen-token");
        prop_assert_eq!(unseen, idf(n, 0));
        prop_assert!(scorer.idf(&term) <= unseen);
        prop_assert!(scorer.idf(&term) >= idf(n, n));

        if corpus.iter().all(|doc| doc.contains(&term)) {
            prop_assert_eq!(scorer.idf(&term), idf(n, n));
        }
    }

    /// Property: reversing the corpus reverses the scores and nothing else.
    #[test]
    fn prop_scores_independent_of_order(corpus in corpus_strategy(), query in query_strategy()) {
        let forward = RelevanceScorer::new(&corpus, ScoreParams::default()).unwrap().score_all(&query);

        let mut reversed_corpus = corpus.clone();
        reversed_corpus.reverse();
        let mut backward = RelevanceScorer::new(&reversed_corpus, ScoreParams::default())
            .unwrap()
            .score_all(&query);
        backward.reverse();

        prop_assert_eq!(forward, backward);
    }

    /// Property: statistics match a naive recount.
    #[test]
    fn prop_stats_match_recount(corpus in corpus_strategy(), term in word_strategy()) {
        let stats = CorpusStats::build::<_, String>(&corpus).unwrap();
        let containing = corpus.iter().filter(|doc| doc.contains(&term)).count();
        prop_assert_eq!(stats.document_frequency(&term), containing);

        let total: usize = corpus.iter().map(Vec::len).sum();
        prop_assert_eq!(stats.average_document_length(), total as f64 / corpus.len() as f64);
        for (i, doc) in corpus.iter().enumerate() {
            prop_assert_eq!(stats.document_length(i), Some(doc.len()));
        }
    }
}

#[test]
fn term_in_every_document_has_the_smallest_idf() {
    let corpus = vec![
        vec!["common".to_string(), "rare".to_string()],
        vec!["common".to_string()],
        vec!["common".to_string(), "other".to_string()],
    ];
    let scorer = RelevanceScorer::new(&corpus, ScoreParams::default()).unwrap();
    assert!(scorer.idf("common") < scorer.idf("rare"));
    assert!(scorer.idf("rare") < scorer.idf("absent"));
    assert!(scorer.idf("common") > 0.0);
}
