use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::priority::Priority;
use crate::strategy::MergeStrategy;
use crate::syntax::Syntax;

/// The unit of merge input and output.
///
/// All three maps are always present (possibly empty), whichever syntax the
/// document came from. Keys are unique; iteration order is by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub sections: BTreeMap<String, Section>,
    #[serde(default)]
    pub merge_points: BTreeMap<String, MergePoint>,
    #[serde(default)]
    pub merge_targets: BTreeMap<String, MergeTarget>,
    /// Where the document was read from. Never part of the serialized form.
    #[serde(skip)]
    pub provenance: Option<Provenance>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper: set the metadata title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    /// Builder-style helper: insert a section.
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.sections.insert(name.into(), section);
        self
    }

    /// Label used in diagnostics: the source path, or `<merged>` when the
    /// document was not read from a file.
    pub fn source_label(&self) -> String {
        self.provenance
            .as_ref()
            .and_then(|p| p.path.as_ref())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<merged>".to_string())
    }

    /// The syntax this document was normalized from, if known.
    pub fn syntax(&self) -> Option<Syntax> {
        self.provenance.as_ref().map(|p| p.syntax)
    }
}

/// Originating file and surface syntax of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provenance {
    pub path: Option<PathBuf>,
    pub syntax: Syntax,
}

impl Provenance {
    pub fn new(path: Option<PathBuf>, syntax: Syntax) -> Self {
        Self { path, syntax }
    }
}

/// Document-level information. `extends` is advisory and never resolved here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub version: String,
    pub language: String,
    pub extends: String,
    pub priority: Priority,
}

/// A named piece of content in the final document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Ordering hint; lower renders first.
    pub order: i64,
    /// Advisory parent section name; not enforced.
    pub parent: String,
    pub merge_id: String,
    pub content: String,
    /// Names of merge points referenced from this section's content.
    pub merge_points: Vec<String>,
    pub priority: Priority,
}

impl Section {
    /// A section holding `content` with no priority.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper: set the ordering hint.
    pub fn ordered(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Builder-style helper: set the priority.
    pub fn prioritized(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// A named insertion slot inside section content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePoint {
    /// Literal marker searched for in section content.
    pub placeholder: String,
    /// Content used when no merge target fills this point.
    pub default: String,
    pub priority: Priority,
}

/// Named replacement content for the merge point of the same name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeTarget {
    /// Strategy tag as written; see [`MergeTarget::strategy`].
    pub strategy: String,
    pub content: String,
    pub priority: Priority,
}

impl MergeTarget {
    /// The resolved strategy; unknown tags behave as `replace`.
    pub fn strategy(&self) -> MergeStrategy {
        MergeStrategy::parse(&self.strategy)
    }
}
