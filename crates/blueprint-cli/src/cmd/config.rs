use crate::output::print_json;
use anyhow::Context;
use blueprint_core::config::{ProjectConfig, WarnLevel};
use clap::Subcommand;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective project configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn load(root: &Path) -> anyhow::Result<ProjectConfig> {
    ProjectConfig::load(root).context("failed to load .blueprint/config.yaml")
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = load(root)?;
    if json {
        return print_json(&config);
    }

    let agents = if config.agents.is_empty() {
        "all".to_string()
    } else {
        config.agents.join(", ")
    };
    println!("agents:        {agents}");
    println!(
        "script:        {}",
        config.script.as_deref().unwrap_or("all declared")
    );
    println!(
        "templates_dir: {}",
        config
            .templates_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "auto".to_string())
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = load(root)?;
    let warnings = config.validate(root);

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
