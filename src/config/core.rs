use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for jumbler
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JumblerConfig {
    /// Word list configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Interactive prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Where the word list lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DictionaryConfig {
    /// Path to a plain text file with one word per line.
    /// When unset, `dict.txt` in the current directory is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DictionaryConfig {
    /// The configured path, or the default relative to the working directory
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_dictionary_path)
    }
}

/// Prompt shown before reading the query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptConfig {
    #[serde(default = "default_prompt_text")]
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: default_prompt_text(),
        }
    }
}

pub(crate) fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dict.txt")
}

pub(crate) fn default_prompt_text() -> String {
    "Anagram to find>".to_string()
}
