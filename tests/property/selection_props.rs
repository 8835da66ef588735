//! Top-k selection properties.
//!
//! The single-pass selectors must agree with a stable descending sort: the
//! highest scores first, and among equal scores the earliest index first.

use fragrank::{select_top3, select_top_k};
use proptest::prelude::*;

/// Oracle: stable sort by descending score, keep the first k indices.
fn oracle_top_k(scores: &[f64], k: usize) -> Vec<Option<usize>> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap());
    let mut top: Vec<Option<usize>> = order.into_iter().take(k).map(Some).collect();
    top.resize(k, None);
    top
}

/// Scores drawn from a tiny set so ties are everywhere.
fn tied_scores_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop::sample::select(vec![-1.0, 0.0, 1.0, 2.5]), 0..20)
}

fn scores_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, 0..40)
}

proptest! {
    /// Property: select_top3 is the first three of a stable descending sort.
    #[test]
    fn prop_top3_matches_stable_sort(scores in scores_strategy()) {
        prop_assert_eq!(select_top3(&scores).to_vec(), oracle_top_k(&scores, 3));
    }

    /// Property: ties go to the earliest index.
    #[test]
    fn prop_top3_ties_keep_earliest(scores in tied_scores_strategy()) {
        prop_assert_eq!(select_top3(&scores).to_vec(), oracle_top_k(&scores, 3));
    }

    /// Property: the general selector with k = 3 is the fixed three-slot pass.
    #[test]
    fn prop_top_k_generalizes_top3(scores in tied_scores_strategy()) {
        prop_assert_eq!(select_top_k(&scores, 3), select_top3(&scores).to_vec());
    }

    /// Property: select_top_k matches the oracle for every k.
    #[test]
    fn prop_top_k_matches_stable_sort(scores in tied_scores_strategy(), k in 0usize..8) {
        prop_assert_eq!(select_top_k(&scores, k), oracle_top_k(&scores, k));
    }

    /// Property: slots are empty exactly when there were too few scores.
    #[test]
    fn prop_absent_slots_only_when_short(scores in scores_strategy()) {
        let top = select_top3(&scores);
        let filled = top.iter().filter(|slot| slot.is_some()).count();
        prop_assert_eq!(filled, scores.len().min(3));
        // Filled slots come first
        prop_assert!(top.iter().skip(filled).all(Option::is_none));
    }

    /// Property: selected scores are non-increasing.
    #[test]
    fn prop_top3_descending(scores in scores_strategy()) {
        let values: Vec<f64> = select_top3(&scores).iter().flatten().map(|&i| scores[i]).collect();
        prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }
}
