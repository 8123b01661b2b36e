use std::path::{Path, PathBuf};
use stump_core::paths;

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `STUMP_ROOT` env var (passed in as `explicit`)
/// 2. Nearest ancestor of cwd containing `.stump/`
/// 3. Nearest ancestor of cwd containing `.git/`
/// 4. cwd itself
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_from(&cwd)
}

fn resolve_from(start: &Path) -> PathBuf {
    find_upward(start, paths::STUMP_DIR)
        .or_else(|| find_upward(start, ".git"))
        .unwrap_or_else(|| start.to_path_buf())
}

/// First directory at or above `start` that has a `marker` subdirectory.
fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}
