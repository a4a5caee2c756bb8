use crate::output::{print_json, print_table};
use anyhow::Context;
use blueprint_core::{
    config::ProjectConfig,
    generate::{self, AgentReport, GenerateOptions, GenerationReport},
    paths,
    types::ScriptVariant,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub fn run(
    root: &Path,
    agents: Vec<String>,
    script: Option<&str>,
    templates: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = ProjectConfig::load(root).context("failed to load .blueprint/config.yaml")?;

    // Command-line values override the project config.
    let agents = if agents.is_empty() {
        config.agents.clone()
    } else {
        agents
    };
    let variant = match script {
        Some(s) => Some(s.parse::<ScriptVariant>()?),
        None => config
            .script_variant()
            .context("invalid script in .blueprint/config.yaml")?,
    };
    let explicit_dir = templates.or_else(|| config.templates_dir.clone());
    let templates_dir = paths::resolve_templates_dir(root, explicit_dir.as_deref());

    if !json {
        if agents.is_empty() {
            println!("Generating command files for all supported agents...");
        } else {
            println!("Generating command files for agents: {}", agents.join(", "));
        }
    }

    let opts = GenerateOptions {
        agents,
        variant,
        templates_dir,
    };
    let report = generate::generate(root, &opts)?;

    if json {
        return print_json(&report);
    }
    print_report(root, &report);
    Ok(())
}

fn print_report(root: &Path, report: &GenerationReport) {
    for agent in &report.agents {
        println!(
            "\nGenerating commands for {} in {}/",
            agent.agent,
            display_path(root, &agent.directory)
        );
        let unique: BTreeSet<&PathBuf> = agent.created.iter().collect();
        for path in unique {
            println!("  created: {}", display_path(root, path));
        }
    }

    println!();
    let rows = report.agents.iter().map(|a| summary_row(root, a)).collect();
    print_table(&["AGENT", "DIRECTORY", "CREATED", "FAILED"], rows);

    let failures = report.total_failures();
    if failures == 0 {
        println!("\nAgent command files generated successfully!");
    } else {
        println!(
            "\nAgent command files generated with {failures} failed item(s); see warnings above."
        );
    }
}

fn summary_row(root: &Path, agent: &AgentReport) -> Vec<String> {
    vec![
        agent.agent.clone(),
        display_path(root, &agent.directory),
        agent.created.len().to_string(),
        agent.failures.len().to_string(),
    ]
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_is_root_relative() {
        let root = Path::new("/work/project");
        assert_eq!(
            display_path(root, Path::new("/work/project/.claude/commands/blueprintkit.plan.md")),
            ".claude/commands/blueprintkit.plan.md"
        );
        assert_eq!(display_path(root, Path::new("/elsewhere/x")), "/elsewhere/x");
    }
}
