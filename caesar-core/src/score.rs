//! Plausibility scoring of candidate plaintexts against English statistics.
//!
//! Two sub-scores are combined:
//!
//! - a negated chi-squared statistic of the observed letter counts against
//!   [`ENGLISH_FREQ`], so that a smaller deviation gives a higher score
//! - the fraction of letters that belong to [`ETAOIN`]
//!
//! Texts without letters get `-inf` for the chi-squared part but a neutral
//! `0.0` for the ETAOIN part.

use crate::frequency::{ENGLISH_FREQ, ETAOIN, LetterTally};

/// Weight of the ETAOIN fraction in [`combined_score`]
pub const DEFAULT_ETAOIN_WEIGHT: f64 = 5.0;

/// Negated chi-squared deviation from English letter frequencies
pub fn chi_squared_score(text: &str) -> f64 {
    chi_squared_from_tally(&LetterTally::from_text(text))
}

/// Fraction of letters in `text` that are one of `ETAOINSHRDLU`
pub fn etaoin_score(text: &str) -> f64 {
    etaoin_from_tally(&LetterTally::from_text(text))
}

/// `chi_squared_score + weight * etaoin_score`
pub fn combined_score(text: &str, weight: f64) -> f64 {
    let tally = LetterTally::from_text(text);
    chi_squared_from_tally(&tally) + weight * etaoin_from_tally(&tally)
}

fn chi_squared_from_tally(tally: &LetterTally) -> f64 {
    if tally.is_empty() {
        return f64::NEG_INFINITY;
    }
    let n = tally.total() as f64;
    let chi2: f64 = ENGLISH_FREQ
        .iter()
        .zip(tally.counts())
        .map(|(&pct, &observed)| {
            let expected = pct / 100.0 * n;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    -chi2
}

fn etaoin_from_tally(tally: &LetterTally) -> f64 {
    if tally.is_empty() {
        return 0.0;
    }
    let common: usize = ETAOIN
        .iter()
        .map(|&letter| tally.get(letter as char))
        .sum();
    common as f64 / tally.total() as f64
}

/// Scoring parameters used by the analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub etaoin_weight: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            etaoin_weight: DEFAULT_ETAOIN_WEIGHT,
        }
    }
}

impl Scorer {
    pub fn new(etaoin_weight: f64) -> Self {
        Self { etaoin_weight }
    }

    /// Combined score of `text` with this scorer's weight
    pub fn score(&self, text: &str) -> f64 {
        combined_score(text, self.etaoin_weight)
    }
}
