//! Configuration loading from `.jumbler.toml`.

mod core;
mod loader;

pub use self::core::{DictionaryConfig, JumblerConfig, PromptConfig};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME};
