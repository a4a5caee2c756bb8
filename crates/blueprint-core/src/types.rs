use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ScriptVariant
// ---------------------------------------------------------------------------

/// Shell dialect a template can declare a distinct invocation command for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptVariant {
    Sh,
    Ps,
}

impl ScriptVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptVariant::Sh => "sh",
            ScriptVariant::Ps => "ps",
        }
    }
}

impl fmt::Display for ScriptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScriptVariant {
    type Err = crate::error::BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sh" => Ok(ScriptVariant::Sh),
            "ps" => Ok(ScriptVariant::Ps),
            other => Err(crate::error::BlueprintError::UnknownScriptVariant(
                other.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
