/// Letter rotation shared by encryption, decryption and key search

/// Size of the Latin alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Rotates a single ASCII letter forward by `shift` positions (already
/// reduced to 0..26), keeping its case. Anything else is returned as is.
#[inline]
fn rotate_char(ch: char, shift: u8) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let offset = (ch as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}

/// Applies a Caesar shift to every ASCII letter of `text`.
///
/// The shift may be any integer: it is normalised with a Euclidean
/// remainder, so `-3` and `23` produce the same output. Digits, whitespace,
/// punctuation and non-ASCII characters are copied through untouched.
pub fn shift_text(text: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(ALPHABET_LEN) as u8;
    if shift == 0 {
        return text.to_string();
    }
    text.chars().map(|ch| rotate_char(ch, shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shift_wraps_around() {
        assert_eq!(shift_text("xyz", 2), "zab");
        assert_eq!(shift_text("XYZ", 3), "ABC");
    }

    #[test]
    fn test_negative_shift_matches_complement() {
        let text = "Attack at Dawn!";
        assert_eq!(shift_text(text, -3), shift_text(text, 23));
        assert_eq!(shift_text(text, -29), shift_text(text, 23));
    }

    #[test]
    fn test_large_shift_is_reduced() {
        assert_eq!(shift_text("abc", 27), "bcd");
        assert_eq!(shift_text("abc", 26 * 1000), "abc");
        assert_eq!(shift_text("abc", i64::MIN), shift_text("abc", i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(shift_text("héllo wörld ✓", 1), "iémmp xösme ✓");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(shift_text("", 5), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn shift_then_unshift_is_identity(ref text in "\\PC{0,200}", k in any::<i32>()) {
            let k = k as i64;
            prop_assert_eq!(&shift_text(&shift_text(text, k), -k), text);
        }

        #[test]
        fn zero_shift_is_identity(ref text in "\\PC{0,200}") {
            prop_assert_eq!(&shift_text(text, 0), text);
        }

        #[test]
        fn non_letters_keep_position_and_value(ref text in "\\PC{0,200}", k in -100i64..100) {
            let out = shift_text(text, k);
            prop_assert_eq!(out.chars().count(), text.chars().count());
            for (a, b) in text.chars().zip(out.chars()) {
                if !a.is_ascii_alphabetic() {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn letter_case_is_preserved(ref text in "[a-zA-Z .,!0-9]{0,200}", k in -100i64..100) {
            let out = shift_text(text, k);
            for (a, b) in text.chars().zip(out.chars()) {
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
                prop_assert_eq!(a.is_ascii_lowercase(), b.is_ascii_lowercase());
            }
        }
    }
}
