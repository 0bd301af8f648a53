//! Word list loading.
//!
//! A word list is a plain text file with one word per line. Lines are trimmed
//! and blank lines dropped; the remaining order is preserved.

use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read words from `reader`, one per line.
///
/// `origin` names the source in error messages.
pub fn read_word_list<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            log::debug!("Unreadable line {} in {}", index + 1, origin.display());
            Error::resource_unavailable(origin, e)
        })?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Open the word list at `path` and read it fully.
///
/// The file handle is closed before returning, on success and on error.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::resource_unavailable(path, e))?;
    let words = read_word_list(BufReader::new(file), path)?;
    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
