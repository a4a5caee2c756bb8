use crate::agent::{AgentProfile, TOML_EXTENSION};
use crate::paths;
use crate::template::CommandTemplate;
use crate::types::ScriptVariant;
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::sync::OnceLock;

/// Substituted for `{SCRIPT}` when the template declares no command for the
/// requested variant.
pub const MISSING_SCRIPT_COMMAND: &str = "(Missing script command)";

pub const SCRIPT_PLACEHOLDER: &str = "{SCRIPT}";
pub const ARGS_PLACEHOLDER: &str = "{ARGS}";
pub const ARGUMENTS_PLACEHOLDER: &str = "$ARGUMENTS";

/// One agent command file, ready to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCommand {
    pub agent: String,
    pub template: String,
    pub variant: ScriptVariant,
    pub filename: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Path rewrites
// ---------------------------------------------------------------------------

static PATH_REWRITES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

/// Applied in order; `memory/` runs before `scripts/` before `templates/`.
fn path_rewrites() -> &'static [(Regex, &'static str)] {
    PATH_REWRITES.get_or_init(|| {
        vec![
            (Regex::new(r"/?memory/").unwrap(), ".blueprint/memory/"),
            (Regex::new(r"/?scripts/").unwrap(), ".blueprint/scripts/"),
            (Regex::new(r"/?templates/").unwrap(), ".blueprint/templates/"),
        ]
    })
}

/// Prefix `memory/`, `scripts/` and `templates/` (with or without a leading
/// `/`) with `.blueprint/`, anywhere in `text`.
pub fn rewrite_paths(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in path_rewrites() {
        out = re.replace_all(&out, NoExpand(*replacement)).into_owned();
    }
    out
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace every placeholder in `body`, then rewrite project paths.
///
/// `script_command` of `None` renders as [`MISSING_SCRIPT_COMMAND`].
pub fn substitute(body: &str, script_command: Option<&str>, arg_format: &str) -> String {
    let script = script_command.unwrap_or(MISSING_SCRIPT_COMMAND);
    let replaced = body
        .replace(SCRIPT_PLACEHOLDER, script)
        .replace(ARGS_PLACEHOLDER, arg_format)
        .replace(ARGUMENTS_PLACEHOLDER, arg_format);
    rewrite_paths(&replaced)
}

// ---------------------------------------------------------------------------
// Output formatting
// ---------------------------------------------------------------------------

/// Final file content for `extension`.
///
/// TOML output wraps both fields in `"""` literals without escaping; a `"""`
/// inside the description or body produces invalid TOML.
pub fn format_output(description: &str, body: &str, extension: &str) -> String {
    if extension == TOML_EXTENSION {
        format!("description = \"\"\"{description}\"\"\"\n\nprompt = \"\"\"{body}\"\"\"")
    } else {
        body.to_string()
    }
}

/// Substitute and format `template` for one agent and script variant.
pub fn render(
    template: &CommandTemplate,
    agent: &AgentProfile,
    variant: ScriptVariant,
) -> RenderedCommand {
    let body = substitute(
        &template.body,
        template.script(variant.as_str()),
        agent.arg_format,
    );
    RenderedCommand {
        agent: agent.name.to_string(),
        template: template.name.clone(),
        variant,
        filename: paths::output_filename(&template.name, agent.extension),
        content: format_output(&template.description, &body, agent.extension),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent;
    use std::collections::BTreeMap;

    fn template(body: &str, scripts: &[(&str, &str)]) -> CommandTemplate {
        CommandTemplate {
            name: "plan".to_string(),
            description: "Test cmd".to_string(),
            body: body.to_string(),
            scripts: scripts
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn script_placeholder_uses_variant_command() {
        let out = substitute("Run {SCRIPT} now. Again: {SCRIPT}", Some("run.sh"), "$ARGUMENTS");
        assert_eq!(out, "Run run.sh now. Again: run.sh");
    }

    #[test]
    fn missing_script_uses_sentinel() {
        let t = template("Run {SCRIPT}", &[("sh", "run.sh")]);
        let out = render(&t, agent::find("claude").unwrap(), ScriptVariant::Ps);
        assert_eq!(out.content, "Run (Missing script command)");
    }

    #[test]
    fn args_and_arguments_use_arg_format() {
        let out = substitute("a={ARGS} b=$ARGUMENTS", None, "{{args}}");
        assert_eq!(out, "a={{args}} b={{args}}");
    }

    #[test]
    fn dollar_arguments_survive_for_markdown_agents() {
        let out = substitute("User input: $ARGUMENTS", None, "$ARGUMENTS");
        assert_eq!(out, "User input: $ARGUMENTS");
    }

    #[test]
    fn rewrites_paths_with_and_without_slash() {
        assert_eq!(
            rewrite_paths("See scripts/run.sh and /memory/notes.md"),
            "See .blueprint/scripts/run.sh and .blueprint/memory/notes.md"
        );
        assert_eq!(
            rewrite_paths("Load templates/spec-template.md"),
            "Load .blueprint/templates/spec-template.md"
        );
    }

    #[test]
    fn rewrite_is_not_word_anchored() {
        assert_eq!(rewrite_paths("src/memory/x"), "src.blueprint/memory/x");
    }

    #[test]
    fn rewrite_applies_inside_script_command() {
        let out = substitute("Run `{SCRIPT}`", Some("scripts/bash/check.sh --json"), "$ARGUMENTS");
        assert_eq!(out, "Run `.blueprint/scripts/bash/check.sh --json`");
    }

    #[test]
    fn replacement_dollar_signs_are_literal() {
        let out = substitute("memory/$1", None, "$ARGUMENTS");
        assert_eq!(out, ".blueprint/memory/$1");
    }

    #[test]
    fn toml_output_is_exact() {
        assert_eq!(
            format_output("Test cmd", "Hello", "toml"),
            "description = \"\"\"Test cmd\"\"\"\n\nprompt = \"\"\"Hello\"\"\""
        );
    }

    #[test]
    fn non_toml_output_is_body_verbatim() {
        assert_eq!(format_output("ignored", "Hello\n", "prompt.md"), "Hello\n");
    }

    #[test]
    fn render_names_file_after_template_and_extension() {
        let t = template("Hello", &[]);
        let gemini = render(&t, agent::find("gemini").unwrap(), ScriptVariant::Sh);
        assert_eq!(gemini.filename, "blueprintkit.plan.toml");
        assert_eq!(
            gemini.content,
            "description = \"\"\"Test cmd\"\"\"\n\nprompt = \"\"\"Hello\"\"\""
        );

        let copilot = render(&t, agent::find("copilot").unwrap(), ScriptVariant::Sh);
        assert_eq!(copilot.filename, "blueprintkit.plan.prompt.md");
        assert_eq!(copilot.content, "Hello");
    }

    #[test]
    fn render_round_trips_script_command() {
        let t = template("Execute {SCRIPT} with {ARGS}", &[("sh", "run.sh")]);
        let out = render(&t, agent::find("qwen").unwrap(), ScriptVariant::Sh);
        assert!(out.content.contains("run.sh"));
        assert!(out.content.contains("{{args}}"));
        assert!(!out.content.contains("{SCRIPT}"));
        assert_eq!(out.agent, "qwen");
        assert_eq!(out.variant, ScriptVariant::Sh);
    }
}
