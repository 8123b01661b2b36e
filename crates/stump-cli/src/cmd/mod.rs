pub mod browse;
pub mod candidates;
pub mod config;
pub mod init;
pub mod points;
pub mod qa;
pub mod spin;

use anyhow::Context;
use std::path::{Path, PathBuf};
use stump_core::{config::Config, Dataset};

/// Content file to read: `--content` when given, else `content.path` from
/// config resolved against the project root.
pub fn content_path(root: &Path, config: &Config, content: Option<&Path>) -> PathBuf {
    match content {
        Some(p) => p.to_path_buf(),
        None => config.content_path(root),
    }
}

pub fn load(root: &Path, content: Option<&Path>) -> anyhow::Result<(Config, Dataset)> {
    let config = Config::load(root).context("failed to load config")?;
    let path = content_path(root, &config, content);
    let dataset = Dataset::load(&path)
        .with_context(|| format!("failed to load candidates from {}", path.display()))?;
    Ok((config, dataset))
}
