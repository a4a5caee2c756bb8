use crate::output::print_json;
use anyhow::Context;
use blueprint_core::{agent, render, template, types::ScriptVariant};
use std::path::Path;

pub fn run(
    template_path: &Path,
    agent_name: &str,
    script: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let profile = agent::select(&[agent_name])?
        .into_iter()
        .next()
        .with_context(|| format!("agent '{agent_name}' not found"))?;

    let variant = match script {
        Some(s) => s.parse::<ScriptVariant>()?,
        None => profile
            .script_variants
            .first()
            .copied()
            .unwrap_or(ScriptVariant::Sh),
    };

    let tpl = template::load(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;
    let rendered = render::render(&tpl, profile, variant);

    if json {
        print_json(&rendered)?;
    } else {
        print!("{}", rendered.content);
    }
    Ok(())
}
