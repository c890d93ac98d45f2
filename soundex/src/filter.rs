//! Per-word predicates built on Soundex codes.
//!
//! ```
//! use soundex::filter::{Filter, Homophone};
//!
//! let filter = Homophone::new("robert").unwrap();
//!
//! assert!(filter.matches("rupert"));
//! assert!(!filter.matches("rubin"));
//! ```
use crate::encoder::{codes_match, soundex};
use crate::error::Error;

pub trait Filter {
    type Error;

    /// Whether `word` passes the filter. Words that fail to encode do not.
    fn matches(&self, word: &str) -> bool;

    fn try_matches(&self, word: &str) -> Result<bool, Self::Error>;
}

/// Accepts words that share the Soundex code of a reference word.
#[derive(Clone, Debug)]
pub struct Homophone {
    code: Option<String>,
}

impl Homophone {
    pub fn new(reference: &str) -> Result<Self, Error> {
        Ok(Self {
            code: soundex(reference)?,
        })
    }

    /// The reference code, absent if the reference word was too short.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl Filter for Homophone {
    type Error = Error;

    fn matches(&self, word: &str) -> bool {
        self.try_matches(word).unwrap_or_else(|err| {
            tracing::warn!(word, %err, "treating word that failed to encode as a non-match");
            false
        })
    }

    fn try_matches(&self, word: &str) -> Result<bool, Self::Error> {
        Ok(codes_match(self.code(), soundex(word)?.as_deref()))
    }
}
