//! Soundex is a phonetic encoding that maps a word to a four character
//! code, one letter followed by three digits, so that words which sound
//! alike share the same code. It is commonly used for approximate name
//! matching in search and record linkage.
//!
//! Encoding happens in two steps, each exposed on its own:
//!
//! 1. [normalize](./normalizer/fn.normalize.html) keeps the first character
//!    and reduces the rest of the word to its deduplicated coding consonants.
//! 2. [soundex](./encoder/fn.soundex.html) maps those consonants to digit
//!    classes and pads or truncates the result to four characters.
//!
//! ### Example
//!
//! ```
//! use soundex::{soundex, sounds_like};
//!
//! assert_eq!(soundex("Ashcraft").unwrap().as_deref(), Some("A261"));
//! assert_eq!(soundex("Tymczak").unwrap().as_deref(), Some("T520"));
//!
//! assert!(sounds_like("Hilbert", "Heilbronn").unwrap());
//! ```
//!
//! Only the ASCII letters `A-Z` take part in the code. Words shorter than two
//! characters have no code and `soundex` returns `Ok(None)` for them.

#![deny(
    future_incompatible,
    nonstandard_style,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![deny(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::decimal_literal_representation,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::explicit_into_iter_loop,
    clippy::explicit_iter_loop,
    clippy::expl_impl_clone_on_copy,
    clippy::fallible_impl_from,
    clippy::manual_filter_map,
    clippy::filter_map_next,
    clippy::manual_find_map,
    clippy::float_arithmetic,
    clippy::get_unwrap,
    clippy::if_not_else,
    clippy::inline_always,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::map_flatten,
    clippy::match_same_arms,
    clippy::maybe_infinite_iter,
    clippy::mem_forget,
    clippy::multiple_inherent_impl,
    clippy::mut_mut,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::map_unwrap_or,
    clippy::path_buf_push_overwrite,
    clippy::print_stdout,
    clippy::redundant_closure_for_method_calls,
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::single_match_else,
    clippy::string_add,
    clippy::string_add_assign,
    clippy::type_repetition_in_bounds,
    clippy::unicode_not_nfc,
    clippy::unseparated_literal_suffix,
    clippy::used_underscore_binding,
    clippy::wildcard_dependencies,
)]

#[macro_use]
extern crate lazy_static;

pub mod constants;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod normalizer;

pub use encoder::{soundex, sounds_like, Encoding, EncodingError};
pub use error::Error;
pub use normalizer::{normalize, NormalizationError};
