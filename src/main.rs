// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fragrank::{chunk_text, normalize, rank_documents, Config};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Normalize { file } => {
            println!("{}", normalize(&read_input(file.as_deref())?));
        }
        Commands::Chunk {
            file,
            max_length,
            overlap,
            json,
        } => {
            let max_length = max_length.unwrap_or(config.chunking.max_length);
            let overlap = overlap.unwrap_or(config.chunking.overlap);
            let text = normalize(&read_input(file.as_deref())?);
            let chunks = chunk_text(&text, max_length, overlap)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&chunks)?);
            } else {
                display::print_chunks(&chunks);
            }
        }
        Commands::Rank {
            query,
            file,
            k1,
            b,
            delta,
            json,
        } => {
            let mut params = config.scoring;
            params.k1 = k1.unwrap_or(params.k1);
            params.b = b.unwrap_or(params.b);
            params.delta = delta.unwrap_or(params.delta);

            let query = normalize(&query);
            let candidates: Vec<String> = read_candidates(file.as_deref())?
                .iter()
                .map(|text| normalize(text))
                .collect();
            let ranking = rank_documents(&query, &candidates, params)
                .context("no candidates to rank")?;

            if json {
                let report = RankReport {
                    query: &query,
                    top: ranking
                        .ranked()
                        .map(|(index, score)| RankedCandidate {
                            index,
                            score,
                            text: &candidates[index],
                        })
                        .collect(),
                    scores: &ranking.scores,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display::print_ranking(&query, &candidates, &ranking);
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RankReport<'a> {
    query: &'a str,
    top: Vec<RankedCandidate<'a>>,
    scores: &'a [f64],
}

#[derive(Serialize)]
struct RankedCandidate<'a> {
    index: usize,
    score: f64,
    text: &'a str,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// One candidate per non-blank line, or a JSON array of strings for `.json`.
fn read_candidates(file: Option<&Path>) -> Result<Vec<String>> {
    let input = read_input(file)?;
    let is_json = file
        .and_then(Path::extension)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let candidates: Vec<String> =
            serde_json::from_str(&input).context("expected a JSON array of strings")?;
        return Ok(candidates);
    }

    Ok(input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}
