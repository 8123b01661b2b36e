use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use stump_core::config::{Config, WarnLevel};

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,
    /// Validate the config for common mistakes
    Validate,
}

pub fn run(
    root: &Path,
    content: Option<&Path>,
    subcmd: ConfigSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    match subcmd {
        ConfigSubcommand::Show => show(root, &config, content, json),
        ConfigSubcommand::Validate => validate(&config, json),
    }
}

fn show(root: &Path, config: &Config, content: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let resolved = super::content_path(root, config, content);
    if json {
        return print_json(&serde_json::json!({
            "config": config,
            "contentPath": resolved,
        }));
    }
    print!("{}", config.to_yaml()?);
    println!("# content file: {}", resolved.display());
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<()> {
    let warnings = config.validate();
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();

    if json {
        print_json(&warnings)?;
    } else if warnings.is_empty() {
        println!("Config OK.");
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("{tag}: {}", w.message);
        }
    }

    if errors > 0 {
        anyhow::bail!("{errors} config error(s)");
    }
    Ok(())
}
