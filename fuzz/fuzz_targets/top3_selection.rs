// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for top-k selection.
//!
//! The fixed three-slot pass and the general k-slot pass must agree on every
//! input, NaN and infinities included, and neither may pick an index twice.

#![no_main]

use fragrank::{select_top3, select_top_k};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|scores: Vec<f64>| {
    let top3 = select_top3(&scores);

    // INVARIANT 1: the general selector agrees with the fixed one at k = 3
    assert_eq!(select_top_k(&scores, 3), top3.to_vec());

    // INVARIANT 2: picked indices are in range and distinct
    let picked: Vec<usize> = top3.iter().flatten().copied().collect();
    for (i, &index) in picked.iter().enumerate() {
        assert!(index < scores.len());
        assert!(!picked[..i].contains(&index), "index {index} picked twice");
    }

    // INVARIANT 3: filled slots are contiguous from the front
    let filled = top3.iter().take_while(|slot| slot.is_some()).count();
    assert_eq!(filled, picked.len());

    // INVARIANT 4: picked scores never increase and NaN is never picked
    for pair in picked.windows(2) {
        assert!(scores[pair[0]] >= scores[pair[1]]);
    }
    for &index in &picked {
        assert!(!scores[index].is_nan());
    }
});
