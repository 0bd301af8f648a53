use std::fs;
use std::path::Path;

use super::core::JumblerConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".jumbler.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a candidate config file from disk
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<JumblerConfig> {
    toml::from_str::<JumblerConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Anchor an explicitly configured relative dictionary path at the config file's directory
pub(crate) fn resolve_relative_paths(mut config: JumblerConfig, config_dir: &Path) -> JumblerConfig {
    if let Some(path) = config.dictionary.path.take() {
        config.dictionary.path = Some(if path.is_relative() {
            config_dir.join(path)
        } else {
            path
        });
    }
    config
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<JumblerConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
            Some(resolve_relative_paths(config, config_dir))
        }
        Err(e) => {
            log::warn!("{}. Ignoring {}.", e, config_path.display());
            None
        }
    }
}

/// A missing candidate is normal; anything else is worth a warning
pub(crate) fn log_read_error(config_path: &Path, error: &std::io::Error) {
    match error.kind() {
        std::io::ErrorKind::NotFound => {}
        _ => log::warn!("Cannot read {}: {}", config_path.display(), error),
    }
}

/// `start` followed by its parents, at most `max_depth` directories in total
pub fn directory_ancestors(start: &Path, max_depth: usize) -> impl Iterator<Item = &Path> {
    start.ancestors().take(max_depth)
}

/// Search `start` and its ancestors for the first loadable config file
pub fn load_config_from(start: &Path) -> JumblerConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            JumblerConfig::default()
        })
}

pub fn load_config() -> JumblerConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            JumblerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, JumblerConfig::default());
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.dictionary.resolved_path(), PathBuf::from("dict.txt"));
        assert_eq!(config.prompt.text, "Anagram to find>");
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [dictionary]
            path = "shortdict.txt"

            [prompt]
            text = "Word? "
        "#})
        .unwrap();
        assert_eq!(config.dictionary.path, Some(PathBuf::from("shortdict.txt")));
        assert_eq!(config.prompt.text, "Word? ");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[dictionary]\npath = 42\n");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_relative_dictionary_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[dictionary]\npath = \"words/dict.txt\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path());
        assert_eq!(config.dictionary.path, Some(dir.path().join("words/dict.txt")));
    }

    #[test]
    fn test_absolute_dictionary_path_kept() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("elsewhere.txt");
        let config = resolve_relative_paths(
            JumblerConfig {
                dictionary: crate::config::DictionaryConfig {
                    path: Some(absolute.clone()),
                },
                ..JumblerConfig::default()
            },
            Path::new("/ignored"),
        );
        assert_eq!(config.dictionary.path, Some(absolute));
    }

    #[test]
    fn test_config_found_in_ancestor_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[prompt]\ntext = \"> \"\n").unwrap();

        let config = load_config_from(&nested);
        assert_eq!(config.prompt.text, "> ");
        // No [dictionary] section: the default stays relative to the working directory
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.dictionary.resolved_path(), PathBuf::from("dict.txt"));
    }

    #[test]
    fn test_invalid_config_is_skipped() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("child");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[prompt]\ntext = \"ok\"\n").unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(&nested);
        assert_eq!(config.prompt.text, "ok");
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let ancestors: Vec<_> = directory_ancestors(Path::new("/a/b/c/d"), 2).collect();
        assert_eq!(ancestors, vec![Path::new("/a/b/c/d"), Path::new("/a/b/c")]);
    }

    #[test]
    fn test_search_stops_at_nearest_config() {
        // Every level from the start up to the temp root holds a config, so
        // nothing outside the temp dir can be consulted.
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        for (level, text) in [
            (nested.clone(), "nearest"),
            (dir.path().join("a"), "middle"),
            (dir.path().to_path_buf(), "root"),
        ] {
            fs::write(
                level.join(CONFIG_FILE_NAME),
                format!("[prompt]\ntext = \"{}\"\n", text),
            )
            .unwrap();
        }

        assert_eq!(load_config_from(&nested).prompt.text, "nearest");
        assert_eq!(load_config_from(&dir.path().join("a")).prompt.text, "middle");
    }
}
