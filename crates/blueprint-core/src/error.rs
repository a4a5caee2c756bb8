use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error(
        "invalid agent names: {}; supported agents: {}",
        .invalid.join(", "),
        .supported.join(", ")
    )]
    UnknownAgent {
        invalid: Vec<String>,
        supported: Vec<String>,
    },

    #[error("no command templates found in {}", .dir.display())]
    MissingTemplates { dir: PathBuf },

    #[error("invalid frontmatter in {}: expected leading and closing '---' lines", .path.display())]
    MalformedTemplate { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown script variant '{0}': expected one of sh, ps")]
    UnknownScriptVariant(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
