use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The surface syntax a document was written in.
///
/// Two syntaxes are structured and map field-for-field onto the model; the
/// third is prose with optional frontmatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Toml,
    Yaml,
    Markdown,
}

impl Syntax {
    /// Infer the syntax from a file name's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TypeError> {
        let path = path.as_ref();
        let lower = path.to_string_lossy().to_lowercase();
        if lower.ends_with(".toml") {
            Ok(Self::Toml)
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Ok(Self::Yaml)
        } else if lower.ends_with(".md") || lower.ends_with(".markdown") {
            Ok(Self::Markdown)
        } else {
            Err(TypeError::UnsupportedSyntax(path.display().to_string()))
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Markdown => "Markdown",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
