//! Canonical anagram signatures.
//!
//! A signature is the word's characters, case-folded one at a time and sorted.
//! Two words are anagrams of each other exactly when their signatures are
//! equal.

use crate::errors::{Error, Result};
use std::fmt;

/// Case-insensitive, order-independent form of a word's letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the signature of `word`.
///
/// Each character is case-folded on its own and the results sorted; nothing is
/// removed, so surrounding whitespace must be stripped by the caller.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `word` is empty or only whitespace.
///
/// # Example
///
/// ```
/// use jumbler::anagram::normalize;
///
/// assert_eq!(normalize("MAGAM").unwrap(), normalize("gamma").unwrap());
/// assert_ne!(normalize("KAWEA").unwrap(), normalize("gamma").unwrap());
/// ```
pub fn normalize(word: &str) -> Result<Signature> {
    if word.trim().is_empty() {
        return Err(Error::invalid_input("cannot normalize an empty word"));
    }
    Ok(canonical(word))
}

/// Signature without the emptiness check, for scanning word list entries.
pub(crate) fn canonical(word: &str) -> Signature {
    let mut chars: Vec<char> = word.chars().map(fold_case).collect();
    chars.sort_unstable();
    Signature(chars.into_iter().collect())
}

/// Simple one-to-one case folding of a single character.
///
/// The character goes through its uppercase form, so final sigma folds with
/// sigma. Mappings that expand to several characters (`ß`, `İ`) are skipped.
/// The result never depends on where the character sits in the word.
fn fold_case(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase())
        .or_else(|| single(c.to_lowercase()))
        .unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// True when both words are non-blank rearrangements of each other.
pub fn is_anagram(a: &str, b: &str) -> bool {
    match (normalize(a), normalize(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}
