use crate::anagram;
use crate::config::JumblerConfig;
use crate::io::{load_word_list, prompt_query};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Settings for one interactive lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindConfig {
    pub dictionary: PathBuf,
    pub prompt: String,
}

impl FindConfig {
    /// Combine the file configuration with a command-line dictionary override
    pub fn resolve(config: JumblerConfig, dict_override: Option<PathBuf>) -> Self {
        Self {
            dictionary: dict_override.unwrap_or_else(|| config.dictionary.resolved_path()),
            prompt: config.prompt.text,
        }
    }
}

/// Load the word list, ask for a query and write every anagram on its own line.
///
/// The word list is read before prompting so a missing dictionary fails
/// without waiting on the user. Returns the number of matches written.
pub fn run_find<R, W>(config: &FindConfig, input: &mut R, output: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let words = load_word_list(&config.dictionary)?;

    let Some(query) = prompt_query(input, output, &config.prompt)? else {
        return Ok(0);
    };

    let mut count = 0;
    for word in anagram::find(&query, &words)? {
        writeln!(output, "{}", word).context("Failed to write match")?;
        count += 1;
    }
    output.flush().context("Failed to flush output")?;

    log::info!("Found {} anagram(s) of {:?}", count, query);
    Ok(count)
}
