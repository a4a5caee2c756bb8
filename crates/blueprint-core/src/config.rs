use crate::agent;
use crate::error::Result;
use crate::paths;
use crate::types::ScriptVariant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

/// Optional `.blueprint/config.yaml`. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Agents to generate for when none are named on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<String>,
    /// Restrict generation to one script variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Command template directory, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load the project config, or defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: ProjectConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn script_variant(&self) -> Result<Option<ScriptVariant>> {
        self.script.as_deref().map(str::parse::<ScriptVariant>).transpose()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for name in &self.agents {
            if agent::find(name).is_none() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "agents: unknown agent '{name}'; supported agents: {}",
                        agent::names().join(", ")
                    ),
                });
            }
        }

        if let Some(script) = &self.script {
            if script.parse::<ScriptVariant>().is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("script: unknown script variant '{script}'; expected sh or ps"),
                });
            }
        }

        if let Some(dir) = &self.templates_dir {
            let resolved = root.join(dir);
            if !resolved.is_dir() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "templates_dir: {} does not exist",
                        resolved.display()
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
