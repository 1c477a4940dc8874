/// English letter statistics and per-text letter counts

/// Expected frequency (percent) of each letter A..Z in English text
pub const ENGLISH_FREQ: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// The twelve most common English letters ("ETAOIN SHRDLU")
pub const ETAOIN: [u8; 12] = *b"ETAOINSHRDLU";

/// Expected percentage for an uppercase ASCII letter, `None` for anything else
pub fn expected_percent(letter: char) -> Option<f64> {
    letter_index(letter).map(|i| ENGLISH_FREQ[i])
}

#[inline]
fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

/// Occurrences of each letter in a text, case-folded to uppercase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTally {
    counts: [usize; 26],
    total: usize,
}

impl LetterTally {
    /// Counts the ASCII letters of `text`; everything else is ignored
    pub fn from_text(text: &str) -> Self {
        let mut tally = Self::default();
        for ch in text.chars().filter(char::is_ascii_alphabetic) {
            let idx = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
            tally.counts[idx] += 1;
            tally.total += 1;
        }
        tally
    }

    /// Count for `letter` (either case); 0 for non-letters
    pub fn get(&self, letter: char) -> usize {
        letter_index(letter.to_ascii_uppercase())
            .map(|i| self.counts[i])
            .unwrap_or(0)
    }

    /// Number of letters counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// `true` if the text contained no letters at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Counts in alphabetical order, index 0 is 'A'
    pub fn counts(&self) -> &[usize; 26] {
        &self.counts
    }

    /// Non-zero entries as `(letter, count)` pairs, alphabetical
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, &n)| ((b'A' + i as u8) as char, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sums_to_hundred() {
        let sum: f64 = ENGLISH_FREQ.iter().sum();
        assert!((sum - 100.0).abs() < 0.01, "sum was {}", sum);
        assert!(ENGLISH_FREQ.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_expected_percent_lookup() {
        assert_eq!(expected_percent('E'), Some(12.702));
        assert_eq!(expected_percent('Z'), Some(0.074));
        assert_eq!(expected_percent('e'), None);
        assert_eq!(expected_percent('1'), None);
    }

    #[test]
    fn test_etaoin_set() {
        assert_eq!(&ETAOIN, b"ETAOINSHRDLU");
    }

    #[test]
    fn test_tally_hello_world() {
        let tally = LetterTally::from_text("Hello, World! 123");
        let entries: Vec<(char, usize)> = tally.iter().collect();
        assert_eq!(
            entries,
            vec![('D', 1), ('E', 1), ('H', 1), ('L', 3), ('O', 2), ('R', 1), ('W', 1)]
        );
        assert_eq!(tally.total(), 10);
        assert_eq!(tally.get('l'), 3);
        assert_eq!(tally.get('L'), 3);
        assert_eq!(tally.get('Z'), 0);
        assert_eq!(tally.get('!'), 0);
    }

    #[test]
    fn test_tally_without_letters() {
        let tally = LetterTally::from_text("12345 !?");
        assert!(tally.is_empty());
        assert_eq!(tally.counts(), &[0; 26]);
    }

    #[test]
    fn test_tally_total_matches_letter_count() {
        let text = "The quick brown fox, 1999 édition.";
        let tally = LetterTally::from_text(text);
        let letters = text.chars().filter(char::is_ascii_alphabetic).count();
        assert_eq!(tally.total(), letters);
        assert_eq!(tally.counts().iter().sum::<usize>(), letters);
    }
}
