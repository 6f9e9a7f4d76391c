use serde::{Deserialize, Serialize};

/// Configuration for the merge engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Detect placeholder markers and switch to template substitution when a
    /// document contains them. When `false`, standard merging always runs.
    pub template_substitution: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            template_substitution: true,
        }
    }
}

impl MergeConfig {
    /// A configuration that never enters template substitution.
    pub fn standard_only() -> Self {
        Self {
            template_substitution: false,
        }
    }
}
