// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run configuration loaded from JSON.
//!
//! Every field is optional and falls back to the defaults the pipeline was
//! tuned with:
//!
//! ```json
//! {
//!   "scoring":  { "k1": 1.9, "b": 0.3, "delta": 1.9 },
//!   "chunking": { "maxLength": 1600, "overlap": 100 },
//!   "candidates": 16,
//!   "lang": "en"
//! }
//! ```
//!
//! Loading validates the chunk window. Score parameters are taken as given.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::chunk::ChunkWindow;
use crate::scoring::ScoreParams;

/// Default number of candidates requested from the vector index.
pub const DEFAULT_CANDIDATES: usize = 16;

/// Default language for fetched documents and the generated answer.
pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] crate::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub scoring: ScoreParams,
    pub chunking: ChunkWindow,
    pub candidates: usize,
    /// Language code (`en`, `ru`, ...) passed to the document source and
    /// named in the prompt.
    pub lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoreParams::default(),
            chunking: ChunkWindow::default(),
            candidates: DEFAULT_CANDIDATES,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), crate::Error> {
        self.chunking.validate()
    }
}
