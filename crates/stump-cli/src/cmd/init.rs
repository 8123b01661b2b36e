use anyhow::Context;
use std::path::Path;
use stump_core::{config::Config, paths};

pub fn run(root: &Path) -> anyhow::Result<()> {
    let config = Config::default();

    if paths::config_path(root).exists() {
        println!("{} already exists", paths::CONFIG_FILE);
    } else {
        config.save(root).context("failed to write config")?;
        println!("Created {}", paths::CONFIG_FILE);
    }

    let content = config.content_path(root);
    if !content.exists() {
        println!("Note: content file {} does not exist yet", content.display());
    }
    Ok(())
}
