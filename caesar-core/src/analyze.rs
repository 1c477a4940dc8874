//! Brute-force key recovery.
//!
//! Every key in `0..26` is tried (including the identity 0), each candidate
//! is scored with a [`Scorer`], and the candidates are ranked best first.
//! Ranking uses a stable sort, so equal scores keep ascending key order.

use crate::shift::{ALPHABET_LEN, shift_text};
use crate::score::Scorer;

/// Number of candidates produced by a full sweep
pub const KEY_SPACE: usize = ALPHABET_LEN as usize;

/// Default number of candidates in a [`Listing::Top`] view
pub const DEFAULT_TOP_N: usize = 10;

/// One decryption attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Shift the ciphertext is assumed to have been encrypted with
    pub key: u8,
    pub text: String,
    pub score: f64,
}

/// Which part of the ranking to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// The first `n` candidates (clamped to the key space)
    Top(usize),
    /// All candidates
    All,
}

impl Default for Listing {
    fn default() -> Self {
        Listing::Top(DEFAULT_TOP_N)
    }
}

impl Listing {
    pub fn from_flags(top_n: usize, show_all: bool) -> Self {
        if show_all {
            Listing::All
        } else {
            Listing::Top(top_n)
        }
    }
}

/// Result of a brute-force sweep, ordered by descending score
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    ranked: Vec<Candidate>,
}

impl Analysis {
    /// All candidates, best first
    pub fn ranked(&self) -> &[Candidate] {
        &self.ranked
    }

    /// Highest-scoring candidate (lowest key on ties)
    pub fn best(&self) -> &Candidate {
        // A sweep always yields KEY_SPACE candidates
        &self.ranked[0]
    }

    /// The first `n` candidates, or all of them if `n` exceeds the key space
    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn listing(&self, listing: Listing) -> &[Candidate] {
        match listing {
            Listing::Top(n) => self.top(n),
            Listing::All => self.ranked(),
        }
    }

    pub fn into_ranked(self) -> Vec<Candidate> {
        self.ranked
    }
}

impl Scorer {
    /// Tries every key on `ciphertext` and ranks the results
    pub fn analyze(&self, ciphertext: &str) -> Analysis {
        let mut ranked: Vec<Candidate> = (0..KEY_SPACE as u8)
            .map(|key| {
                let text = shift_text(ciphertext, -(key as i64));
                let score = self.score(&text);
                Candidate { key, text, score }
            })
            .collect();

        // sort_by is stable: ties stay in key order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        Analysis { ranked }
    }
}

/// Ranks all keys for `ciphertext` using the default scorer
pub fn analyze(ciphertext: &str) -> Analysis {
    Scorer::default().analyze(ciphertext)
}
