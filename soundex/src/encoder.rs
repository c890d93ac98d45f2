//! The encoder turns a normalized word into its four character Soundex code.
//!
//! Example:
//!
//! ```
//! use soundex::soundex;
//!
//! assert_eq!(soundex("robert").unwrap().as_deref(), Some("R163"));
//! assert_eq!(soundex("rupert").unwrap().as_deref(), Some("R163"));
//!
//! // Single characters carry no code.
//! assert_eq!(soundex("a").unwrap(), None);
//! ```
use crate::constants::{CODE_LENGTH, LETTER_CLASSES, MIN_WORD_LENGTH, PADDING};
use crate::error::Error;
use crate::normalizer::normalize;

use std::iter;

use serde::Serialize;

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("no digit class for character {character:?} (word {word:?})")]
    UnmappedCharacter { character: char, word: String },
}

/// A word along with the intermediate and final results of encoding it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Encoding {
    /// The word as it was given.
    pub word: String,

    /// Anchor letter followed by the deduplicated coding consonants.
    pub normalized: String,

    /// The Soundex code, absent for words shorter than two characters.
    pub code: Option<String>,
}

impl Encoding {
    /// Encode `word`. An empty word has an empty normalized form and no code.
    pub fn new(word: &str) -> Result<Encoding, Error> {
        let normalized = if word.is_empty() {
            String::new()
        } else {
            normalize(word)?
        };

        Ok(Encoding {
            word: word.to_string(),
            normalized,
            code: soundex(word)?,
        })
    }
}

/// Encode `word` using Soundex.
///
/// Returns `Ok(None)` for words shorter than two characters, otherwise the
/// anchor letter followed by the first three distinct digit classes of the
/// normalized word, right-padded with `0`.
///
/// Consecutive consonants in the same digit class produce a single digit,
/// even when they are different letters (e.g. `C` and `K`).
pub fn soundex(word: &str) -> Result<Option<String>, Error> {
    if word.chars().count() < MIN_WORD_LENGTH {
        return Ok(None);
    }

    let normalized = normalize(word)?;
    let mut chars = normalized.chars();

    let mut code = String::with_capacity(CODE_LENGTH);
    code.extend(chars.next());

    let mut last_class = None;
    let mut digits = 0;

    for c in chars {
        if digits == CODE_LENGTH - 1 {
            break;
        }

        let class = digit_class(c, word)?;

        if last_class != Some(class) {
            code.push(class);
            digits += 1;
        }
        last_class = Some(class);
    }

    code.extend(iter::repeat(PADDING).take(CODE_LENGTH - 1 - digits));

    tracing::trace!(word, %normalized, %code, "encoded word");

    Ok(Some(code))
}

/// Returns `true` when both words have a Soundex code and the codes match.
///
/// Words too short to be encoded never sound like anything, themselves
/// included.
pub fn sounds_like(a: &str, b: &str) -> Result<bool, Error> {
    Ok(codes_match(soundex(a)?.as_deref(), soundex(b)?.as_deref()))
}

/// Two codes match only when both are present and equal.
pub(crate) fn codes_match(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(a_code), Some(b_code)) if a_code == b_code)
}

/// Look up the digit class of a normalized character of `word`.
///
/// Normalization only leaves characters that have a class, so a miss here
/// means the normalizer and the table disagree.
fn digit_class(c: char, word: &str) -> Result<char, EncodingError> {
    LETTER_CLASSES.get(&c).copied().ok_or_else(|| {
        tracing::error!(word, character = %c, "normalized word contains an unmapped character");
        EncodingError::UnmappedCharacter {
            character: c,
            word: word.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(word: &str) -> Option<String> {
        soundex(word).unwrap()
    }

    #[test]
    fn test_too_short() {
        assert_eq!(code(""), None);
        assert_eq!(code("a"), None);
        assert_eq!(code("Z"), None);
        assert_eq!(code("é"), None);
    }

    #[test]
    fn test_two_characters_is_enough() {
        assert_eq!(code("ab").as_deref(), Some("A100"));
        assert_eq!(code("aa").as_deref(), Some("A000"));
    }

    #[test]
    fn test_anchor_only_is_padded() {
        assert_eq!(code("lee").as_deref(), Some("L000"));
        assert_eq!(code("ayo").as_deref(), Some("A000"));
    }

    #[test]
    fn test_known_codes() {
        let cases = [
            ("ashcraft", "A261"),
            ("ashcroft", "A261"),
            ("rubin", "R150"),
            ("robert", "R163"),
            ("rupert", "R163"),
            ("euler", "E460"),
            ("ellery", "E460"),
            ("gauss", "G200"),
            ("ghosh", "G200"),
            ("hilbert", "H416"),
            ("heilbronn", "H416"),
            ("knuth", "K530"),
            ("kant", "K530"),
            ("lloyd", "L430"),
            ("ladd", "L300"),
            ("lukasiewicz", "L200"),
        ];

        for (word, expected) in cases {
            assert_eq!(code(word).as_deref(), Some(expected), "{word}");
        }
    }

    #[test]
    fn test_same_class_different_letters_collapse() {
        // C, K and S all sit in class 2.
        assert_eq!(code("acks").as_deref(), Some("A200"));
        assert_eq!(code("tymczak").as_deref(), Some("T520"));
    }

    #[test]
    fn test_truncates_after_three_digits() {
        assert_eq!(code("washington").as_deref(), Some("W252"));
        assert_eq!(code("bdlmr").as_deref(), Some("B345"));
    }

    #[test]
    fn test_anchor_is_not_encoded() {
        // The anchor P and the following F share a class, but only letters
        // after the anchor contribute digits.
        assert_eq!(code("pfister").as_deref(), Some("P123"));
    }

    #[test]
    fn test_anchor_is_uppercased() {
        assert_eq!(code("knuth"), code("KNUTH"));
        assert!(code("knuth").unwrap().starts_with('K'));
    }

    #[test]
    fn test_non_ascii_anchor_keeps_four_characters() {
        let result = code("éclair").unwrap();
        assert_eq!(result, "É246");
        assert_eq!(result.chars().count(), CODE_LENGTH);
    }

    #[test]
    fn test_non_ascii_word_is_case_insensitive() {
        for word in ["éclair", "ölund", "ångström"] {
            let lower = code(word);
            assert_eq!(code(&word.to_uppercase()), lower, "{word}");
            assert_eq!(code(&word.to_lowercase()), lower, "{word}");
        }
    }

    #[test]
    fn test_digit_class_of_consonants() {
        assert_eq!(digit_class('B', "bob"), Ok('1'));
        assert_eq!(digit_class('K', "kant"), Ok('2'));
        assert_eq!(digit_class('R', "rubin"), Ok('6'));
    }

    #[test]
    fn test_digit_class_rejects_unmapped_characters() {
        for c in ['A', 'H', '1'] {
            assert_eq!(
                digit_class(c, "word"),
                Err(EncodingError::UnmappedCharacter {
                    character: c,
                    word: "word".to_string(),
                })
            );
        }
    }

    #[test]
    fn test_codes_match() {
        assert!(codes_match(Some("R163"), Some("R163")));
        assert!(!codes_match(Some("R163"), Some("R150")));
        assert!(!codes_match(None, Some("R163")));
        assert!(!codes_match(None, None));
    }

    #[test]
    fn test_sounds_like() {
        assert!(sounds_like("robert", "rupert").unwrap());
        assert!(sounds_like("Knuth", "kant").unwrap());
        assert!(!sounds_like("lloyd", "ladd").unwrap());
        assert!(!sounds_like("a", "a").unwrap());
        assert!(!sounds_like("", "ab").unwrap());
    }

    #[test]
    fn test_encoding_record() {
        let encoding = Encoding::new("ashcraft").unwrap();

        assert_eq!(encoding.word, "ashcraft");
        assert_eq!(encoding.normalized, "ASCRFT");
        assert_eq!(encoding.code.as_deref(), Some("A261"));
    }

    #[test]
    fn test_encoding_record_without_code() {
        let encoding = Encoding::new("a").unwrap();

        assert_eq!(encoding.normalized, "A");
        assert_eq!(encoding.code, None);
    }

    #[test]
    fn test_encoding_record_of_empty_word() {
        let encoding = Encoding::new("").unwrap();

        assert_eq!(encoding.word, "");
        assert_eq!(encoding.normalized, "");
        assert_eq!(encoding.code, None);
    }

    #[test]
    fn test_encoding_serialization() {
        let encoding = Encoding::new("gauss").unwrap();

        let json = serde_json::to_string(&encoding).unwrap();
        assert_eq!(
            json,
            r#"{"word":"gauss","normalized":"GS","code":"G200"}"#
        );
    }
}
