//! Anagram matching.
//!
//! Words are compared through their canonical [`Signature`]: the letters
//! lower-cased and sorted. The module is pure; callers hand in the word list
//! as any iterator of strings.

pub mod matcher;
pub mod signature;

pub use matcher::{find, Matches};
pub use signature::{is_anagram, normalize, Signature};
