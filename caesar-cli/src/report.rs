//! Text and JSON rendering of analysis results.

use std::io::Write;

use anyhow::Result;
use caesar_core::{Analysis, Candidate, Listing};
use colored::Colorize;
use serde::Serialize;

/// Prints the selected part of the ranking, one candidate per line
pub fn write_listing<W: Write>(out: &mut W, analysis: &Analysis, listing: Listing) -> Result<()> {
    match listing {
        Listing::All => {
            for c in analysis.ranked() {
                writeln!(out, "[key={:2}] score={:9.3}  -> {}", c.key, c.score, c.text)?;
            }
        }
        Listing::Top(n) => {
            for (i, c) in analysis.top(n).iter().enumerate() {
                writeln!(
                    out,
                    "[rank {:2}] key={:2}  score={:9.3}  -> {}",
                    i + 1,
                    c.key,
                    c.score,
                    c.text
                )?;
            }
        }
    }
    Ok(())
}

/// Prints the highlighted best-guess block
pub fn write_best_guess<W: Write>(out: &mut W, best: &Candidate) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Best guess ===".bold())?;
    writeln!(
        out,
        "Key (encryption shift) = {}",
        best.key.to_string().green().bold()
    )?;
    writeln!(out, "Plaintext candidate      = {}", best.text.green())?;
    Ok(())
}

/// Listing followed by the best guess
pub fn write_text<W: Write>(out: &mut W, analysis: &Analysis, listing: Listing) -> Result<()> {
    write_listing(out, analysis, listing)?;
    write_best_guess(out, analysis.best())
}

#[derive(Serialize)]
struct JsonCandidate<'a> {
    rank: usize,
    key: u8,
    /// `None` for texts without letters (score is -inf)
    score: Option<f64>,
    text: &'a str,
}

impl<'a> JsonCandidate<'a> {
    fn new(rank: usize, c: &'a Candidate) -> Self {
        Self {
            rank,
            key: c.key,
            score: c.score.is_finite().then_some(c.score),
            text: &c.text,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    best: JsonCandidate<'a>,
    candidates: Vec<JsonCandidate<'a>>,
}

/// Pretty-printed JSON document with the best guess and the selected candidates
pub fn write_json<W: Write>(out: &mut W, analysis: &Analysis, listing: Listing) -> Result<()> {
    let report = JsonReport {
        best: JsonCandidate::new(1, analysis.best()),
        candidates: analysis
            .listing(listing)
            .iter()
            .enumerate()
            .map(|(i, c)| JsonCandidate::new(i + 1, c))
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
