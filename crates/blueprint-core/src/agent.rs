use crate::error::{BlueprintError, Result};
use crate::types::ScriptVariant;
use serde::Serialize;

// ---------------------------------------------------------------------------
// AgentProfile
// ---------------------------------------------------------------------------

/// How one AI coding assistant expects its slash command files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    pub name: &'static str,
    /// Relative to the project root.
    pub output_dir: &'static str,
    /// May be compound, e.g. `prompt.md`.
    pub extension: &'static str,
    /// Token the agent expands to the user's arguments.
    pub arg_format: &'static str,
    pub script_variants: &'static [ScriptVariant],
}

pub const TOML_EXTENSION: &str = "toml";

const SH_PS: &[ScriptVariant] = &[ScriptVariant::Sh, ScriptVariant::Ps];

macro_rules! agent {
    ($name:expr, $dir:expr, $ext:expr, $args:expr) => {
        AgentProfile {
            name: $name,
            output_dir: $dir,
            extension: $ext,
            arg_format: $args,
            script_variants: SH_PS,
        }
    };
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static AGENTS: &[AgentProfile] = &[
    agent!("claude", ".claude/commands", "md", "$ARGUMENTS"),
    agent!("gemini", ".gemini/commands", "toml", "{{args}}"),
    agent!("copilot", ".github/prompts", "prompt.md", "$ARGUMENTS"),
    agent!("cursor-agent", ".cursor/commands", "md", "$ARGUMENTS"),
    agent!("qwen", ".qwen/commands", "toml", "{{args}}"),
    agent!("opencode", ".opencode/command", "md", "$ARGUMENTS"),
    agent!("windsurf", ".windsurf/workflows", "md", "$ARGUMENTS"),
    agent!("codex", ".codex/prompts", "md", "$ARGUMENTS"),
    agent!("kilocode", ".kilocode/workflows", "md", "$ARGUMENTS"),
    agent!("auggie", ".augment/commands", "md", "$ARGUMENTS"),
    agent!("roo", ".roo/commands", "md", "$ARGUMENTS"),
    agent!("codebuddy", ".codebuddy/commands", "md", "$ARGUMENTS"),
    agent!("q", ".amazonq/prompts", "md", "$ARGUMENTS"),
];

/// Every supported agent, in canonical order.
pub fn all() -> &'static [AgentProfile] {
    AGENTS
}

pub fn names() -> Vec<&'static str> {
    AGENTS.iter().map(|a| a.name).collect()
}

pub fn find(name: &str) -> Option<&'static AgentProfile> {
    AGENTS.iter().find(|a| a.name == name)
}

/// Resolve requested agent names against the registry.
///
/// An empty request selects every agent. Any unknown name fails the whole
/// selection; repeated names are kept once, in first-seen order.
pub fn select<S: AsRef<str>>(requested: &[S]) -> Result<Vec<&'static AgentProfile>> {
    if requested.is_empty() {
        return Ok(AGENTS.iter().collect());
    }
    let requested: Vec<&str> = requested.iter().map(|s| s.as_ref()).collect();

    let invalid: Vec<String> = requested
        .iter()
        .filter(|name| find(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !invalid.is_empty() {
        return Err(BlueprintError::UnknownAgent {
            invalid,
            supported: names().into_iter().map(str::to_string).collect(),
        });
    }

    let mut selected: Vec<&'static AgentProfile> = Vec::new();
    for name in requested {
        if let Some(profile) = find(name) {
            if !selected.iter().any(|a| a.name == profile.name) {
                selected.push(profile);
            }
        }
    }
    Ok(selected)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_thirteen_unique_agents() {
        let names = names();
        assert_eq!(names.len(), 13);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn toml_agents_are_gemini_and_qwen() {
        let toml: Vec<_> = all()
            .iter()
            .filter(|a| a.extension == TOML_EXTENSION)
            .map(|a| a.name)
            .collect();
        assert_eq!(toml, vec!["gemini", "qwen"]);
        for name in toml {
            assert_eq!(find(name).unwrap().arg_format, "{{args}}");
        }
    }

    #[test]
    fn copilot_uses_compound_extension() {
        let copilot = find("copilot").unwrap();
        assert_eq!(copilot.output_dir, ".github/prompts");
        assert_eq!(copilot.extension, "prompt.md");
        assert_ne!(copilot.extension, TOML_EXTENSION);
    }

    #[test]
    fn empty_selection_is_all_agents() {
        let none: [&str; 0] = [];
        assert_eq!(select(&none).unwrap().len(), all().len());
    }

    #[test]
    fn selection_keeps_request_order_and_dedupes() {
        let selected = select(&["qwen", "claude", "qwen"]).unwrap();
        let names: Vec<_> = selected.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["qwen", "claude"]);
    }

    #[test]
    fn unknown_agent_fails_whole_selection() {
        let err = select(&["claude", "foobar"]).unwrap_err();
        match err {
            BlueprintError::UnknownAgent { invalid, supported } => {
                assert_eq!(invalid, vec!["foobar".to_string()]);
                assert_eq!(supported.len(), 13);
                assert_eq!(supported[0], "claude");
                assert_eq!(supported[12], "q");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
