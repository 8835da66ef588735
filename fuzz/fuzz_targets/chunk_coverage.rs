// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for chunking invariants.
//!
//! Any text, any window: either the window is rejected up front, or the chunks
//! stay within bounds, start one stride apart and cover every code point.

#![no_main]

use arbitrary::Arbitrary;
use fragrank::{chunk_ranges, chunk_text, normalize, ChunkWindow};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    max_length: u8,
    overlap: u8,
}

fuzz_target!(|input: Input| {
    let max_length = input.max_length as usize;
    let overlap = input.overlap as usize;
    let text = normalize(&input.text);

    let chunks = match chunk_text(&text, max_length, overlap) {
        Ok(chunks) => chunks,
        Err(_) => {
            // INVARIANT 1: only a window that can't advance is rejected
            assert!(
                overlap >= max_length,
                "valid window {max_length}/{overlap} rejected"
            );
            return;
        }
    };

    let len = text.chars().count();
    let window = ChunkWindow::new(max_length, overlap).unwrap();
    let ranges = chunk_ranges(len, &window).unwrap();
    assert_eq!(ranges.len(), chunks.len());

    // INVARIANT 2: every chunk fits the window and matches its range
    let chars: Vec<char> = text.chars().collect();
    for (chunk, range) in chunks.iter().zip(&ranges) {
        assert!(chunk.chars().count() <= max_length);
        assert_eq!(*chunk, chars[range.clone()].iter().collect::<String>());
    }

    // INVARIANT 3: starts are one stride apart and nothing is skipped
    for pair in ranges.windows(2) {
        assert_eq!(pair[1].start - pair[0].start, window.stride());
        assert!(pair[1].start <= pair[0].end);
    }
    assert_eq!(ranges.last().map_or(0, |r| r.end), len);
});
