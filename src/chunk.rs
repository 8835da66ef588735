// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-length overlapping windows over normalized text.
//!
//! Lengths and offsets are in code points, never bytes, so a window boundary
//! can't split a multi-byte character. Window `i + 1` starts `stride` code
//! points after window `i`:
//!
//! ```text
//! max_length = 5, overlap = 2, stride = 3
//!
//! text:    a b c d e f g h i j
//! chunk 0: a b c d e
//! chunk 1:       d e f g h
//! chunk 2:             g h i j
//! chunk 3:                   j
//! ```
//!
//! Windows keep coming while their start is inside the text, so the tail can
//! be a short window that lies entirely within its predecessor.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result};

/// Default window length in code points.
pub const DEFAULT_MAX_LENGTH: usize = 1600;

/// Default overlap between consecutive windows in code points.
pub const DEFAULT_OVERLAP: usize = 100;

/// Chunking parameters: window length and overlap, both in code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkWindow {
    pub max_length: usize,
    pub overlap: usize,
}

impl Default for ChunkWindow {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl ChunkWindow {
    /// Build a window, rejecting `overlap >= max_length`.
    pub fn new(max_length: usize, overlap: usize) -> Result<Self> {
        let window = Self {
            max_length,
            overlap,
        };
        window.validate()?;
        Ok(window)
    }

    /// A window whose stride is zero would never advance. Note `max_length == 0`
    /// fails here too, since `overlap` can't be below zero.
    pub fn validate(&self) -> Result<()> {
        if self.overlap >= self.max_length {
            return Err(Error::InvalidChunkWindow {
                max_length: self.max_length,
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    /// Distance between consecutive window starts.
    pub fn stride(&self) -> usize {
        self.max_length.saturating_sub(self.overlap)
    }

    /// Split `text` with this window. See [`chunk_text`].
    pub fn chunk(&self, text: &str) -> Result<Vec<String>> {
        chunk_text(text, self.max_length, self.overlap)
    }
}

/// Code-point ranges of the windows over a text of `len` code points.
pub fn chunk_ranges(len: usize, window: &ChunkWindow) -> Result<Vec<Range<usize>>> {
    window.validate()?;
    let stride = window.stride();

    let ranges = (0..len)
        .step_by(stride)
        .map(|start| start..start.saturating_add(window.max_length).min(len))
        .collect();
    Ok(ranges)
}

/// Split `text` into windows of at most `max_length` code points, each
/// starting `max_length - overlap` code points after the previous one.
///
/// Empty text gives no chunks. `overlap >= max_length` is rejected with
/// [`Error::InvalidChunkWindow`].
///
/// ```
/// use fragrank::chunk_text;
///
/// let chunks = chunk_text("abcdefghij", 4, 1).unwrap();
/// assert_eq!(chunks, vec!["abcd", "defg", "ghij", "j"]);
/// ```
pub fn chunk_text(text: &str, max_length: usize, overlap: usize) -> Result<Vec<String>> {
    let window = ChunkWindow {
        max_length,
        overlap,
    };
    let chars: Vec<char> = text.chars().collect();
    let chunks: Vec<String> = chunk_ranges(chars.len(), &window)?
        .into_iter()
        .map(|range| chars[range].iter().collect())
        .collect();

    tracing::debug!(
        chars = chars.len(),
        chunks = chunks.len(),
        max_length,
        overlap,
        "chunked text"
    );
    Ok(chunks)
}
