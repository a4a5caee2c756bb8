//! Agent command generation: registry × templates × script variants.
//!
//! Agent selection and template discovery fail the whole run before anything
//! is written. After that, each (agent, template, variant) is independent: a
//! malformed template or a failed write is logged, recorded in the report and
//! skipped.

use crate::agent::{self, AgentProfile};
use crate::error::{BlueprintError, Result};
use crate::io;
use crate::render::{self, RenderedCommand};
use crate::template;
use crate::types::ScriptVariant;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Options / report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Agent names to generate for; empty means every registered agent.
    pub agents: Vec<String>,
    /// Only render this variant; `None` renders every variant the agent declares.
    pub variant: Option<ScriptVariant>,
    pub templates_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemFailure {
    pub template: String,
    pub variant: ScriptVariant,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub agent: String,
    pub directory: PathBuf,
    /// One entry per successful write, in processing order.
    pub created: Vec<PathBuf>,
    pub failures: Vec<ItemFailure>,
}

impl AgentReport {
    fn new(profile: &AgentProfile, directory: PathBuf) -> Self {
        Self {
            agent: profile.name.to_string(),
            directory,
            created: Vec::new(),
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, template: &str, variant: ScriptVariant, err: &BlueprintError) {
        let message = err.to_string();
        tracing::warn!(
            agent = %self.agent,
            template,
            variant = %variant,
            "skipping command: {message}"
        );
        self.failures.push(ItemFailure {
            template: template.to_string(),
            variant,
            message,
        });
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub templates_dir: PathBuf,
    pub templates: Vec<String>,
    pub agents: Vec<AgentReport>,
}

impl GenerationReport {
    pub fn total_created(&self) -> usize {
        self.agents.iter().map(|a| a.created.len()).sum()
    }

    pub fn total_failures(&self) -> usize {
        self.agents.iter().map(|a| a.failures.len()).sum()
    }

    pub fn agent(&self, name: &str) -> Option<&AgentReport> {
        self.agents.iter().find(|a| a.agent == name)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Write command files for the selected agents under `root`.
pub fn generate(root: &Path, opts: &GenerateOptions) -> Result<GenerationReport> {
    let agents = agent::select(&opts.agents)?;
    let templates = template::discover(&opts.templates_dir)?;

    tracing::info!(
        templates = templates.len(),
        agents = agents.len(),
        dir = %opts.templates_dir.display(),
        "generating agent commands"
    );

    let mut report = GenerationReport {
        templates_dir: opts.templates_dir.clone(),
        templates: templates.iter().map(|p| template::template_name(p)).collect(),
        agents: Vec::with_capacity(agents.len()),
    };

    for profile in agents {
        let agent_report = generate_for_agent(root, profile, &templates, opts.variant)?;
        tracing::info!(
            agent = profile.name,
            created = agent_report.created.len(),
            failed = agent_report.failures.len(),
            "agent commands generated"
        );
        report.agents.push(agent_report);
    }

    tracing::info!(
        created = report.total_created(),
        failed = report.total_failures(),
        "generation finished"
    );
    Ok(report)
}

fn generate_for_agent(
    root: &Path,
    profile: &AgentProfile,
    templates: &[PathBuf],
    only: Option<ScriptVariant>,
) -> Result<AgentReport> {
    let directory = root.join(profile.output_dir);
    io::ensure_dir(&directory)?;

    let variants: Vec<ScriptVariant> = profile
        .script_variants
        .iter()
        .copied()
        .filter(|v| only.is_none() || only == Some(*v))
        .collect();

    let mut report = AgentReport::new(profile, directory);

    for path in templates {
        let name = template::template_name(path);
        let parsed = template::load(path);

        for &variant in &variants {
            let written = match &parsed {
                Ok(tpl) => write_rendered(&report.directory, &render::render(tpl, profile, variant)),
                Err(e) => {
                    report.record_failure(&name, variant, e);
                    continue;
                }
            };
            match written {
                Ok(path) => report.created.push(path),
                Err(e) => report.record_failure(&name, variant, &e),
            }
        }
    }

    Ok(report)
}

fn write_rendered(dir: &Path, rendered: &RenderedCommand) -> Result<PathBuf> {
    let path = dir.join(&rendered.filename);
    io::atomic_write(&path, rendered.content.as_bytes()).map_err(|e| match e {
        BlueprintError::Io(source) => BlueprintError::Write {
            path: path.clone(),
            source,
        },
        other => other,
    })?;
    tracing::debug!(path = %path.display(), variant = %rendered.variant, "wrote command file");
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
