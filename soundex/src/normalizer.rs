//! The normalizer reduces a word to the letters that carry its Soundex code.
//!
//! The first character is kept as the anchor. Everything after it is
//! uppercased, stripped of vowel-like letters (`A E H I O U W Y`) and
//! non-letters, and then runs of the same letter are collapsed into one.
//!
//! Example:
//!
//! ```
//! use soundex::normalize;
//!
//! assert_eq!(normalize("ashcraft").unwrap(), "ASCRFT");
//! assert_eq!(normalize("lloyd").unwrap(), "LLD");
//! ```
//!
//! Filtering happens before collapsing, so identical consonants that were
//! only separated by a removed letter end up adjacent and collapse too.
use crate::constants::INVALID_CHARS_REGEX;
use crate::error::Error;

use std::iter;

use itertools::Itertools;

#[derive(Copy, Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("cannot normalize an empty word")]
    EmptyWord,
}

/// Normalize `word` into its anchor character followed by the deduplicated
/// coding consonants of the remainder.
///
/// Fails with [`NormalizationError::EmptyWord`] when `word` is empty.
pub fn normalize(word: &str) -> Result<String, Error> {
    let mut chars = word.chars();
    let anchor = uppercase_anchor(chars.next().ok_or(NormalizationError::EmptyWord)?);

    let remainder = chars.as_str().to_uppercase();
    let consonants = INVALID_CHARS_REGEX.replace_all(&remainder, "");

    Ok(iter::once(anchor).chain(consonants.chars().dedup()).collect())
}

/// Uppercase the anchor, keeping it as is when its uppercase form is more
/// than one character (e.g. `ß`).
fn uppercase_anchor(c: char) -> char {
    let mut upper = c.to_uppercase();

    if let (Some(u), None) = (upper.next(), upper.next()) {
        u
    } else {
        c
    }
}
