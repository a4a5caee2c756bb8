use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BLUEPRINT_DIR: &str = ".blueprint";
pub const CONFIG_FILE: &str = ".blueprint/config.yaml";

/// Command templates as installed into a project.
pub const PROJECT_TEMPLATES_DIR: &str = ".blueprint/templates/commands";
/// Command templates in the Blueprint Kit source layout.
pub const SOURCE_TEMPLATES_DIR: &str = "templates/commands";

pub const TEMPLATE_EXTENSION: &str = "md";
pub const OUTPUT_PREFIX: &str = "blueprintkit";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Pick the template directory for `root`.
///
/// An explicit directory (flag or config) always wins; relative paths are
/// joined onto `root`. Otherwise the installed project layout is preferred
/// over the source layout.
pub fn resolve_templates_dir(root: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return root.join(dir);
    }
    let project = root.join(PROJECT_TEMPLATES_DIR);
    if project.is_dir() {
        return project;
    }
    root.join(SOURCE_TEMPLATES_DIR)
}

/// `blueprintkit.<template>.<extension>`
pub fn output_filename(template: &str, extension: &str) -> String {
    format!("{OUTPUT_PREFIX}.{template}.{extension}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_filename_uses_prefix() {
        assert_eq!(output_filename("plan", "md"), "blueprintkit.plan.md");
        assert_eq!(
            output_filename("specify", "prompt.md"),
            "blueprintkit.specify.prompt.md"
        );
    }

    #[test]
    fn explicit_templates_dir_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(PROJECT_TEMPLATES_DIR)).unwrap();
        let resolved = resolve_templates_dir(dir.path(), Some(Path::new("custom")));
        assert_eq!(resolved, dir.path().join("custom"));
    }

    #[test]
    fn absolute_templates_dir_is_kept() {
        let dir = TempDir::new().unwrap();
        let abs = dir.path().join("elsewhere");
        let resolved = resolve_templates_dir(Path::new("/unused"), Some(&abs));
        assert_eq!(resolved, abs);
    }

    #[test]
    fn project_layout_preferred_over_source_layout() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(PROJECT_TEMPLATES_DIR)).unwrap();
        std::fs::create_dir_all(dir.path().join(SOURCE_TEMPLATES_DIR)).unwrap();
        assert_eq!(
            resolve_templates_dir(dir.path(), None),
            dir.path().join(PROJECT_TEMPLATES_DIR)
        );
    }

    #[test]
    fn falls_back_to_source_layout() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_templates_dir(dir.path(), None),
            dir.path().join(SOURCE_TEMPLATES_DIR)
        );
    }
}
