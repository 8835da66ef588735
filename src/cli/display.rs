// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the fragrank CLI.
//!
//! Boxes for rankings and chunk listings, a little color when stdout is a
//! terminal. Respects `NO_COLOR`, and plain text goes to pipes.

use std::io::IsTerminal;

use fragrank::Ranking;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn border(piece: &str) -> String {
    styled(&[GRAY], piece)
}

/// ┌─ LABEL ──────┐
fn section_top(label: &str) {
    let label_part = format!("─ {} ", label);
    let fill = BOX_WIDTH.saturating_sub(label_part.chars().count());
    println!(
        "{}{}{}{}",
        border("┌"),
        border("─ "),
        styled(&[BOLD, CYAN], label),
        border(&format!(" {}┐", "─".repeat(fill)))
    );
}

/// │ content      │ with `content` already cut to fit.
fn row(content: &str, visible: usize) {
    let pad = BOX_WIDTH.saturating_sub(visible);
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

fn section_bottom() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn text_row(text: &str) {
    let line = format!(" {}", truncate(text, BOX_WIDTH - 2));
    let visible = line.chars().count();
    row(&line, visible);
}

/// Ranked candidates, best first, with their scores.
pub fn print_ranking(query: &str, candidates: &[String], ranking: &Ranking) {
    section_top(&format!("RANKING  \"{}\"", truncate(query, 40)));
    text_row(&format!("{} candidates scored", ranking.scores.len()));

    for (rank, (index, score)) in ranking.ranked().enumerate() {
        let head = format!(" #{} doc[{}]  score {:.4}", rank + 1, index, score);
        let visible = head.chars().count();
        row(&styled(&[GREEN], &head), visible);
        text_row(&candidates[index]);
    }

    let empty = ranking.top.iter().filter(|slot| slot.is_none()).count();
    if empty > 0 {
        let note = format!(" {} empty slot(s)", empty);
        let visible = note.chars().count();
        row(&styled(&[DIM], &note), visible);
    }
    section_bottom();
}

/// Every chunk on its own, with its position.
pub fn print_chunks(chunks: &[String]) {
    section_top(&format!("CHUNKS  {}", chunks.len()));
    for (i, chunk) in chunks.iter().enumerate() {
        let head = format!(" [{}] {} chars", i, chunk.chars().count());
        let visible = head.chars().count();
        row(&styled(&[BOLD], &head), visible);
        text_row(chunk);
    }
    section_bottom();
}
