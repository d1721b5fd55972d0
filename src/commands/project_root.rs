use std::path::{Path, PathBuf};

use tariff::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Walking upward from `start`, the first directory holding `tariff.toml`
/// wins, then the first git root. Falls back to `start`.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .unwrap_or(start)
        .to_path_buf()
}
