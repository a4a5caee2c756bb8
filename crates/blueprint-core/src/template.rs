//! Command templates: markdown files with a small frontmatter block.
//!
//! ```text
//! ---
//! description: "Create a plan"
//! scripts:
//!   sh: scripts/bash/setup-plan.sh --json
//!   ps: scripts/powershell/setup-plan.ps1 -Json
//! ---
//! Run `{SCRIPT}` with {ARGS}.
//! ```
//!
//! The frontmatter is matched line by line with regexes rather than parsed as
//! YAML. Only `description` and the flat `scripts` mapping are read; nested
//! structures and multi-line values are not interpreted.

use crate::error::{BlueprintError, Result};
use crate::paths;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandTemplate {
    /// File stem of the source template.
    pub name: String,
    pub description: String,
    pub body: String,
    /// Script variant key (`sh`, `ps`, ...) to shell command.
    pub scripts: BTreeMap<String, String>,
}

impl CommandTemplate {
    pub fn script(&self, variant: &str) -> Option<&str> {
        self.scripts.get(variant).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static FRONTMATTER_RE: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();
static SCRIPTS_RE: OnceLock<Regex> = OnceLock::new();

fn frontmatter_re() -> &'static Regex {
    FRONTMATTER_RE.get_or_init(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)").unwrap())
}

fn description_re() -> &'static Regex {
    DESCRIPTION_RE.get_or_init(|| Regex::new(r"(?m)^description:\s*(.*)$").unwrap())
}

fn scripts_re() -> &'static Regex {
    SCRIPTS_RE.get_or_init(|| Regex::new(r"(?m)^scripts:\s*\n((?:\s+[a-z_]+:.*)+)").unwrap())
}

fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches(|c| c == '"' || c == '\'')
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split `content` into frontmatter and body.
///
/// Returns `None` when the opening `---` line or the closing `---` line is
/// missing.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let caps = frontmatter_re().captures(content)?;
    let frontmatter = caps.get(1)?.as_str();
    let body = caps.get(2).map_or("", |m| m.as_str());
    Some((frontmatter, body))
}

/// First `description:` value, unquoted. Empty when absent.
pub fn parse_description(frontmatter: &str) -> String {
    description_re()
        .captures(frontmatter)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_quotes(m.as_str()).to_string())
        .unwrap_or_default()
}

/// Indented `key: value` lines following `scripts:`. Empty when absent.
pub fn parse_scripts(frontmatter: &str) -> BTreeMap<String, String> {
    let mut scripts = BTreeMap::new();
    let Some(block) = scripts_re().captures(frontmatter).and_then(|c| c.get(1)) else {
        return scripts;
    };
    for line in block.as_str().split('\n') {
        let line = line.trim();
        if let Some((key, value)) = line.split_once(':') {
            scripts.insert(key.trim().to_string(), strip_quotes(value).to_string());
        }
    }
    scripts
}

/// Parse template text. `path` only labels the error.
///
/// CRLF and lone CR line endings are normalized to LF first, so
/// Windows-edited templates parse and render with LF endings.
pub fn parse(name: &str, content: &str, path: &Path) -> Result<CommandTemplate> {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let (frontmatter, body) =
        split_frontmatter(&content).ok_or_else(|| BlueprintError::MalformedTemplate {
            path: path.to_path_buf(),
        })?;
    Ok(CommandTemplate {
        name: name.to_string(),
        description: parse_description(frontmatter),
        body: body.to_string(),
        scripts: parse_scripts(frontmatter),
    })
}

/// Read and parse one template file; the name is the file stem.
pub fn load(path: &Path) -> Result<CommandTemplate> {
    let content = std::fs::read_to_string(path)?;
    let name = template_name(path);
    parse(&name, &content, path)
}

pub fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `*.md` files directly inside `dir`, sorted by file name.
///
/// A missing directory or one without templates is an error.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BlueprintError::MissingTemplates {
            dir: dir.to_path_buf(),
        });
    }
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_template = path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(paths::TEMPLATE_EXTENSION);
        if is_template {
            found.push(path);
        }
    }
    if found.is_empty() {
        return Err(BlueprintError::MissingTemplates {
            dir: dir.to_path_buf(),
        });
    }
    found.sort();
    Ok(found)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
