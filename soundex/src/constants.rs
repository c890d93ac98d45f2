use fancy_regex::Regex;
use phf::phf_map;

lazy_static! {

    /// Characters dropped from everything after the anchor letter: the
    /// vowel-like letters plus anything outside `A-Z`.
    pub static ref INVALID_CHARS_REGEX: Regex = Regex::new("[AEHIOUWY]|[^A-Z]").unwrap();
}

/// Length of a complete code, anchor letter included.
pub const CODE_LENGTH: usize = 4;

/// Words shorter than this have no code.
pub const MIN_WORD_LENGTH: usize = 2;

/// Right-padding for codes with fewer than three digit classes.
pub const PADDING: char = '0';

/// Digit class of every consonant that takes part in the code.
pub static LETTER_CLASSES: phf::Map<char, char> = phf_map! {
    'B' => '1',
    'F' => '1',
    'P' => '1',
    'V' => '1',

    'C' => '2',
    'G' => '2',
    'J' => '2',
    'K' => '2',
    'Q' => '2',
    'S' => '2',
    'X' => '2',
    'Z' => '2',

    'D' => '3',
    'T' => '3',

    'L' => '4',

    'M' => '5',
    'N' => '5',

    'R' => '6',
};
