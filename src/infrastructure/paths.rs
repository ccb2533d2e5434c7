//! Filesystem location management for persisted state.
//!
//! This module resolves where the JSON store and log files live when the
//! embedding application does not configure an explicit data directory. It
//! follows the XDG base directory convention with a plain `~/.local/share`
//! fallback.

use std::path::{Path, PathBuf};

/// Name of the per-user data subdirectory.
const APP_DIR: &str = "carrinho";

/// Returns the default data directory for carrinho storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/carrinho` when `XDG_DATA_HOME` is set and non-empty
/// 2. `$HOME/.local/share/carrinho`
/// 3. `./carrinho` as a last resort when no home directory is known
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local/share").join(APP_DIR);
    }
    PathBuf::from(".").join(APP_DIR)
}

/// Returns the JSON storage file path within a data directory.
#[must_use]
pub fn storage_file(data_dir: &Path) -> PathBuf {
    data_dir.join("lists.json")
}

/// Returns the log file path within a data directory.
#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join("carrinho.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_and_log_files_live_in_the_data_dir() {
        let dir = PathBuf::from("/tmp/carrinho-test");
        assert_eq!(storage_file(&dir), dir.join("lists.json"));
        assert_eq!(log_file(&dir), dir.join("carrinho.log"));
    }
}
