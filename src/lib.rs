//! List dictionary words that match an anagram.
//!
//! The matching core in [`anagram`] is pure: it takes the word list as any
//! iterator of strings. The remaining modules are the shell around it.

pub mod anagram;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::anagram::{find, is_anagram, normalize, Matches, Signature};
pub use crate::errors::{Error, Result};
pub use crate::io::{load_word_list, read_word_list};
