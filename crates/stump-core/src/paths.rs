use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STUMP_DIR: &str = ".stump";
pub const CONFIG_FILE: &str = ".stump/config.yaml";

/// Where the site keeps its candidate content, relative to the project root.
pub const DEFAULT_CONTENT_FILE: &str = "docs/content/candidates.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a content path from config against the project root. Absolute
/// paths are returned unchanged.
pub fn content_path(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
