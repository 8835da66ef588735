// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fragrank command-line interface.
//!
//! Three subcommands: `normalize` to clean text, `chunk` to cut it into
//! overlapping windows, and `rank` to re-rank candidate passages against a
//! query. Parameters come from `--config` and can be overridden per flag.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fragrank",
    about = "BM25+ re-ranking and text chunking for retrieval pipelines",
    version
)]
pub struct Cli {
    /// JSON config file with scoring, chunking and candidate settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lowercase text and collapse whitespace
    Normalize {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Normalize text and split it into overlapping windows
    Chunk {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,

        /// Window length in characters
        #[arg(long)]
        max_length: Option<usize>,

        /// Characters shared by consecutive windows (must be < max length)
        #[arg(long)]
        overlap: Option<usize>,

        /// Print a JSON array instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Re-rank candidate passages against a query and show the top 3
    Rank {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// Candidates, one per line, or a JSON array of strings for `.json`
        /// files (stdin if omitted)
        file: Option<PathBuf>,

        /// Term-frequency saturation
        #[arg(long)]
        k1: Option<f64>,

        /// Document-length normalization
        #[arg(long)]
        b: Option<f64>,

        /// Lower bound added for every matching term
        #[arg(long)]
        delta: Option<f64>,

        /// Print JSON instead of boxes
        #[arg(long)]
        json: bool,
    },
}
