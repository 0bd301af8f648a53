//! CLI command implementations.
//!
//! - **find**: prompt for a word and print its anagrams from the word list

pub mod find;

pub use find::{run_find, FindConfig};
