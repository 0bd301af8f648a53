// Test utility module for jumbler integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command for the compiled binary, run from `dir`
pub fn jumbler_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_jumbler"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    assert_cmd::Command::from_std(cmd)
}

/// Temporary directory with an empty `.jumbler.toml`, so the config search
/// stops there instead of walking into the surrounding directories
pub fn empty_workspace() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join(".jumbler.toml"), "").expect("Failed to write config");
    temp_dir
}

/// Like [`empty_workspace`], plus a `dict.txt` with the given contents
pub fn workspace_with_dict(words: &str) -> (TempDir, PathBuf) {
    let temp_dir = empty_workspace();
    let dict_path = temp_dir.path().join("dict.txt");
    std::fs::write(&dict_path, words).expect("Failed to write word list");
    (temp_dir, dict_path)
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
